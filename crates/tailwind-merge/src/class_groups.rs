//! Built-in Tailwind CSS (v4) class groups.
//!
//! [`get_class_group`] maps a base class name (no variants, no important
//! marker, no postfix modifier) to the group of utilities that set the same
//! CSS property. Lookup first tries the full class against the keyword
//! utilities, then splits off the leading segment (`bg` in `bg-red-500`) and
//! validates the remaining value against the groups that segment can name.

use crate::validators::{
    is_arbitrary, is_arbitrary_family_name, is_arbitrary_image,
    is_arbitrary_length, is_arbitrary_number, is_arbitrary_position, is_arbitrary_shadow,
    is_arbitrary_size, is_arbitrary_weight, is_fraction, is_integer, is_number, is_percent,
    is_tshirt_size,
};

/// A group of Tailwind utilities that set the same CSS property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassGroup {
    // Layout
    AspectRatio,
    Container,
    Columns,
    BreakAfter,
    BreakBefore,
    BreakInside,
    BoxDecoration,
    BoxSizing,
    Display,
    SrOnly,
    Float,
    Clear,
    Isolation,
    ObjectFit,
    ObjectPosition,
    Overflow,
    OverflowX,
    OverflowY,
    Overscroll,
    OverscrollX,
    OverscrollY,
    Position,
    Inset,
    InsetX,
    InsetY,
    Start,
    End,
    Top,
    Right,
    Bottom,
    Left,
    Visibility,
    ZIndex,

    // Flexbox and grid
    Basis,
    FlexDirection,
    FlexWrap,
    Flex,
    Grow,
    Shrink,
    Order,
    GridCols,
    ColSpan,
    ColStart,
    ColEnd,
    Col,
    GridRows,
    RowSpan,
    RowStart,
    RowEnd,
    Row,
    GridFlow,
    AutoCols,
    AutoRows,
    Gap,
    GapX,
    GapY,
    JustifyContent,
    JustifyItems,
    JustifySelf,
    AlignContent,
    AlignItems,
    AlignSelf,
    PlaceContent,
    PlaceItems,
    PlaceSelf,

    // Spacing
    Padding,
    PaddingX,
    PaddingY,
    PaddingS,
    PaddingE,
    PaddingT,
    PaddingR,
    PaddingB,
    PaddingL,
    Margin,
    MarginX,
    MarginY,
    MarginS,
    MarginE,
    MarginT,
    MarginR,
    MarginB,
    MarginL,
    SpaceX,
    SpaceXReverse,
    SpaceY,
    SpaceYReverse,

    // Sizing
    Size,
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,

    // Typography
    FontSize,
    FontSmoothing,
    FontStyle,
    FontWeight,
    FontStretch,
    FontFamily,
    FvnNormal,
    FvnOrdinal,
    FvnSlashedZero,
    FvnFigure,
    FvnSpacing,
    FvnFraction,
    Tracking,
    LineClamp,
    Leading,
    ListImage,
    ListPosition,
    ListStyleType,
    TextAlign,
    TextColor,
    PlaceholderColor,
    TextDecoration,
    DecorationStyle,
    DecorationThickness,
    DecorationColor,
    UnderlineOffset,
    TextTransform,
    TextOverflow,
    TextWrap,
    TextShadow,
    TextShadowColor,
    Indent,
    VerticalAlign,
    Whitespace,
    WordBreak,
    Wrap,
    Hyphens,
    Content,

    // Backgrounds and gradients
    BgAttachment,
    BgClip,
    BgOrigin,
    BgPosition,
    BgRepeat,
    BgSize,
    BgImage,
    BgColor,
    BgBlend,
    GradientFromPos,
    GradientViaPos,
    GradientToPos,
    GradientFrom,
    GradientVia,
    GradientTo,

    // Borders
    Rounded,
    RoundedS,
    RoundedE,
    RoundedT,
    RoundedR,
    RoundedB,
    RoundedL,
    RoundedSs,
    RoundedSe,
    RoundedEe,
    RoundedEs,
    RoundedTl,
    RoundedTr,
    RoundedBr,
    RoundedBl,
    BorderW,
    BorderWX,
    BorderWY,
    BorderWS,
    BorderWE,
    BorderWT,
    BorderWR,
    BorderWB,
    BorderWL,
    DivideX,
    DivideXReverse,
    DivideY,
    DivideYReverse,
    BorderStyle,
    DivideStyle,
    BorderColor,
    BorderColorX,
    BorderColorY,
    BorderColorS,
    BorderColorE,
    BorderColorT,
    BorderColorR,
    BorderColorB,
    BorderColorL,
    DivideColor,
    OutlineStyle,
    OutlineOffset,
    OutlineW,
    OutlineColor,

    // Effects
    Shadow,
    ShadowColor,
    InsetShadow,
    InsetShadowColor,
    RingW,
    RingColor,
    RingOffsetW,
    RingOffsetColor,
    InsetRingW,
    InsetRingColor,
    Opacity,
    MixBlend,
    MaskComposite,
    MaskMode,
    MaskType,

    // Masks
    MaskImage,
    MaskImageLinearPos,
    MaskImageLinearFromPos,
    MaskImageLinearFromColor,
    MaskImageLinearToPos,
    MaskImageLinearToColor,
    MaskImageTFromPos,
    MaskImageTFromColor,
    MaskImageTToPos,
    MaskImageTToColor,
    MaskImageRFromPos,
    MaskImageRFromColor,
    MaskImageRToPos,
    MaskImageRToColor,
    MaskImageBFromPos,
    MaskImageBFromColor,
    MaskImageBToPos,
    MaskImageBToColor,
    MaskImageLFromPos,
    MaskImageLFromColor,
    MaskImageLToPos,
    MaskImageLToColor,
    MaskImageXFromPos,
    MaskImageXFromColor,
    MaskImageXToPos,
    MaskImageXToColor,
    MaskImageYFromPos,
    MaskImageYFromColor,
    MaskImageYToPos,
    MaskImageYToColor,
    MaskImageRadial,
    MaskImageRadialFromPos,
    MaskImageRadialFromColor,
    MaskImageRadialToPos,
    MaskImageRadialToColor,
    MaskImageRadialShape,
    MaskImageRadialSize,
    MaskImageRadialPos,
    MaskImageConicPos,
    MaskImageConicFromPos,
    MaskImageConicFromColor,
    MaskImageConicToPos,
    MaskImageConicToColor,
    MaskPosition,
    MaskSize,
    MaskRepeat,
    MaskClip,
    MaskOrigin,

    // Filters
    Filter,
    Blur,
    Brightness,
    Contrast,
    DropShadow,
    DropShadowColor,
    Grayscale,
    HueRotate,
    Invert,
    Saturate,
    Sepia,
    BackdropFilter,
    BackdropBlur,
    BackdropBrightness,
    BackdropContrast,
    BackdropGrayscale,
    BackdropHueRotate,
    BackdropInvert,
    BackdropOpacity,
    BackdropSaturate,
    BackdropSepia,

    // Tables
    BorderCollapse,
    BorderSpacing,
    BorderSpacingX,
    BorderSpacingY,
    TableLayout,
    CaptionSide,

    // Transitions and animation
    Transition,
    TransitionBehavior,
    Duration,
    Ease,
    Delay,
    Animate,

    // Transforms
    Backface,
    Perspective,
    PerspectiveOrigin,
    Rotate,
    RotateX,
    RotateY,
    RotateZ,
    Scale,
    ScaleX,
    ScaleY,
    ScaleZ,
    Scale3d,
    Skew,
    SkewX,
    SkewY,
    Transform,
    TransformOrigin,
    TransformStyle,
    Translate,
    TranslateX,
    TranslateY,
    TranslateZ,
    TranslateNone,

    // Interactivity
    AccentColor,
    Appearance,
    CaretColor,
    ColorScheme,
    Cursor,
    FieldSizing,
    PointerEvents,
    Resize,
    ScrollBehavior,
    ScrollM,
    ScrollMx,
    ScrollMy,
    ScrollMs,
    ScrollMe,
    ScrollMt,
    ScrollMr,
    ScrollMb,
    ScrollMl,
    ScrollP,
    ScrollPx,
    ScrollPy,
    ScrollPs,
    ScrollPe,
    ScrollPt,
    ScrollPr,
    ScrollPb,
    ScrollPl,
    SnapAlign,
    SnapStop,
    SnapType,
    SnapStrictness,
    Touch,
    TouchX,
    TouchY,
    TouchPz,
    UserSelect,
    WillChange,

    // SVG
    Fill,
    StrokeW,
    Stroke,

    // Accessibility
    ForcedColorAdjust,
}

use ClassGroup::*;

/// Returns the group of a base class name, or `None` for non-Tailwind classes.
pub(crate) fn get_class_group(class: &str) -> Option<ClassGroup> {
    // Negative values share the group of their positive counterpart
    let class = match class.strip_prefix('-') {
        Some(rest) if !rest.is_empty() => rest,
        _ => class,
    };
    keyword_group(class).or_else(|| {
        let (head, value) = class.split_once('-')?;
        if value.is_empty() {
            return None;
        }
        valued_group(head, value)
    })
}

/// Utilities that are a single fixed name.
fn keyword_group(class: &str) -> Option<ClassGroup> {
    let group = match class {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "table"
        | "inline-table" | "table-caption" | "table-cell" | "table-column"
        | "table-column-group" | "table-footer-group" | "table-header-group"
        | "table-row-group" | "table-row" | "flow-root" | "grid" | "inline-grid" | "contents"
        | "list-item" | "hidden" => Display,
        "static" | "fixed" | "absolute" | "relative" | "sticky" => Position,
        "visible" | "invisible" | "collapse" => Visibility,
        "isolate" => Isolation,
        "sr-only" | "not-sr-only" => SrOnly,
        "container" => Container,
        "underline" | "overline" | "line-through" | "no-underline" => TextDecoration,
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => TextTransform,
        "italic" | "not-italic" => FontStyle,
        "antialiased" | "subpixel-antialiased" => FontSmoothing,
        "truncate" => TextOverflow,
        "normal-nums" => FvnNormal,
        "ordinal" => FvnOrdinal,
        "slashed-zero" => FvnSlashedZero,
        "lining-nums" | "oldstyle-nums" => FvnFigure,
        "proportional-nums" | "tabular-nums" => FvnSpacing,
        "diagonal-fractions" | "stacked-fractions" => FvnFraction,
        "grow" => Grow,
        "shrink" => Shrink,
        "border" => BorderW,
        "border-x" => BorderWX,
        "border-y" => BorderWY,
        "border-s" => BorderWS,
        "border-e" => BorderWE,
        "border-t" => BorderWT,
        "border-r" => BorderWR,
        "border-b" => BorderWB,
        "border-l" => BorderWL,
        "divide-x" => DivideX,
        "divide-y" => DivideY,
        "rounded" => Rounded,
        "outline" => OutlineW,
        "ring" => RingW,
        "inset-ring" => InsetRingW,
        "shadow" => Shadow,
        "filter" => Filter,
        "blur" => Blur,
        "grayscale" => Grayscale,
        "invert" => Invert,
        "sepia" => Sepia,
        "drop-shadow" => DropShadow,
        "backdrop-filter" => BackdropFilter,
        "backdrop-blur" => BackdropBlur,
        "backdrop-grayscale" => BackdropGrayscale,
        "backdrop-invert" => BackdropInvert,
        "backdrop-sepia" => BackdropSepia,
        "transition" => Transition,
        "transform" => Transform,
        "resize" => Resize,
        _ => return None,
    };
    Some(group)
}

fn valued_group(head: &str, value: &str) -> Option<ClassGroup> {
    match head {
        // Layout
        "aspect" => (matches!(value, "auto" | "square" | "video")
            || is_fraction(value)
            || is_arbitrary(value))
        .then_some(AspectRatio),
        "columns" => (value == "auto"
            || is_integer(value)
            || is_tshirt_size(value)
            || is_arbitrary(value))
        .then_some(Columns),
        "break" => break_group(value),
        "box" => match value {
            "decoration-clone" | "decoration-slice" => Some(BoxDecoration),
            "border" | "content" => Some(BoxSizing),
            _ => None,
        },
        "float" => matches!(value, "right" | "left" | "none" | "start" | "end").then_some(Float),
        "clear" => matches!(value, "left" | "right" | "both" | "none" | "start" | "end")
            .then_some(Clear),
        "isolation" => (value == "auto").then_some(Isolation),
        "object" => match value {
            "contain" | "cover" | "fill" | "none" | "scale-down" => Some(ObjectFit),
            _ if is_position(value) || is_arbitrary(value) => Some(ObjectPosition),
            _ => None,
        },
        "overflow" => axis_group(value, Overflow, OverflowX, OverflowY, |v| {
            matches!(v, "auto" | "hidden" | "clip" | "visible" | "scroll")
        }),
        "overscroll" => axis_group(value, Overscroll, OverscrollX, OverscrollY, |v| {
            matches!(v, "auto" | "contain" | "none")
        }),
        "inset" => inset_group(value),
        "start" => is_inset(value).then_some(Start),
        "end" => is_inset(value).then_some(End),
        "top" => is_inset(value).then_some(Top),
        "right" => is_inset(value).then_some(Right),
        "bottom" => is_inset(value).then_some(Bottom),
        "left" => is_inset(value).then_some(Left),
        "z" => (value == "auto" || is_integer(value) || is_arbitrary(value)).then_some(ZIndex),

        // Flexbox and grid
        "basis" => (is_sizing(value) || is_tshirt_size(value)).then_some(Basis),
        "flex" => match value {
            "row" | "row-reverse" | "col" | "col-reverse" => Some(FlexDirection),
            "wrap" | "wrap-reverse" | "nowrap" => Some(FlexWrap),
            "auto" | "initial" | "none" => Some(Flex),
            _ if is_number(value) || is_fraction(value) || is_arbitrary(value) => Some(Flex),
            _ => None,
        },
        "grow" => (is_number(value) || is_arbitrary(value)).then_some(Grow),
        "shrink" => (is_number(value) || is_arbitrary(value)).then_some(Shrink),
        "order" => (matches!(value, "first" | "last" | "none")
            || is_integer(value)
            || is_arbitrary(value))
        .then_some(Order),
        "grid" => grid_group(value),
        "col" => line_group(value, ColSpan, ColStart, ColEnd, Col),
        "row" => line_group(value, RowSpan, RowStart, RowEnd, Row),
        "auto" => {
            let (axis, rest) = value.split_once('-')?;
            let valid = matches!(rest, "auto" | "min" | "max" | "fr") || is_arbitrary(rest);
            match axis {
                "cols" if valid => Some(AutoCols),
                "rows" if valid => Some(AutoRows),
                _ => None,
            }
        }
        "gap" => axis_group(value, Gap, GapX, GapY, is_spacing),
        "justify" => justify_group(value),
        "content" => match value {
            "normal" | "center" | "center-safe" | "start" | "end" | "end-safe" | "between"
            | "around" | "evenly" | "stretch" | "baseline" => Some(AlignContent),
            "none" => Some(Content),
            _ if is_arbitrary(value) => Some(Content),
            _ => None,
        },
        "items" => matches!(
            value,
            "start"
                | "end"
                | "end-safe"
                | "center"
                | "center-safe"
                | "baseline"
                | "baseline-last"
                | "stretch"
        )
        .then_some(AlignItems),
        "self" => matches!(
            value,
            "auto"
                | "start"
                | "end"
                | "end-safe"
                | "center"
                | "center-safe"
                | "stretch"
                | "baseline"
                | "baseline-last"
        )
        .then_some(AlignSelf),
        "place" => place_group(value),

        // Spacing
        "p" => is_spacing(value).then_some(Padding),
        "px" => is_spacing(value).then_some(PaddingX),
        "py" => is_spacing(value).then_some(PaddingY),
        "ps" => is_spacing(value).then_some(PaddingS),
        "pe" => is_spacing(value).then_some(PaddingE),
        "pt" => is_spacing(value).then_some(PaddingT),
        "pr" => is_spacing(value).then_some(PaddingR),
        "pb" => is_spacing(value).then_some(PaddingB),
        "pl" => is_spacing(value).then_some(PaddingL),
        "m" => is_margin(value).then_some(Margin),
        "mx" => is_margin(value).then_some(MarginX),
        "my" => is_margin(value).then_some(MarginY),
        "ms" => is_margin(value).then_some(MarginS),
        "me" => is_margin(value).then_some(MarginE),
        "mt" => is_margin(value).then_some(MarginT),
        "mr" => is_margin(value).then_some(MarginR),
        "mb" => is_margin(value).then_some(MarginB),
        "ml" => is_margin(value).then_some(MarginL),
        "space" => match value {
            "x-reverse" => Some(SpaceXReverse),
            "y-reverse" => Some(SpaceYReverse),
            _ => match value.split_once('-')? {
                ("x", amount) if is_spacing(amount) => Some(SpaceX),
                ("y", amount) if is_spacing(amount) => Some(SpaceY),
                _ => None,
            },
        },

        // Sizing
        "size" => is_sizing(value).then_some(Size),
        "w" => (is_sizing(value) || is_tshirt_size(value)).then_some(Width),
        "h" => is_sizing(value).then_some(Height),
        "min" => match value.split_once('-')? {
            ("w", size) if is_sizing(size) || is_tshirt_size(size) => Some(MinWidth),
            ("h", size) if is_sizing(size) => Some(MinHeight),
            _ => None,
        },
        "max" => match value.split_once('-')? {
            ("w", size) if is_sizing(size) || is_tshirt_size(size) || size == "prose" => {
                Some(MaxWidth)
            }
            ("h", size) if is_sizing(size) => Some(MaxHeight),
            _ => None,
        },

        // Typography
        "text" => text_group(value),
        "font" => font_group(value),
        "tracking" => (matches!(
            value,
            "tighter" | "tight" | "normal" | "wide" | "wider" | "widest"
        ) || is_arbitrary(value))
        .then_some(Tracking),
        "leading" => (matches!(
            value,
            "none" | "tight" | "snug" | "normal" | "relaxed" | "loose"
        ) || is_spacing(value))
        .then_some(Leading),
        "line" => {
            let clamp = value.strip_prefix("clamp-")?;
            (clamp == "none" || is_integer(clamp) || is_arbitrary(clamp)).then_some(LineClamp)
        }
        "list" => match value {
            "inside" | "outside" => Some(ListPosition),
            "disc" | "decimal" | "none" => Some(ListStyleType),
            _ if is_arbitrary(value) => Some(ListStyleType),
            _ => {
                let image = value.strip_prefix("image-")?;
                (image == "none" || is_arbitrary(image)).then_some(ListImage)
            }
        },
        "decoration" => match value {
            "solid" | "double" | "dotted" | "dashed" | "wavy" => Some(DecorationStyle),
            "clone" | "slice" => Some(BoxDecoration),
            "auto" | "from-font" => Some(DecorationThickness),
            _ if is_number(value) || is_arbitrary_length(value) => Some(DecorationThickness),
            _ => Some(DecorationColor),
        },
        "underline" => {
            let offset = value.strip_prefix("offset-")?;
            (offset == "auto" || is_number(offset) || is_arbitrary(offset))
                .then_some(UnderlineOffset)
        }
        "indent" => is_spacing(value).then_some(Indent),
        "align" => (matches!(
            value,
            "baseline"
                | "top"
                | "middle"
                | "bottom"
                | "text-top"
                | "text-bottom"
                | "sub"
                | "super"
        ) || is_arbitrary(value))
        .then_some(VerticalAlign),
        "whitespace" => matches!(
            value,
            "normal" | "nowrap" | "pre" | "pre-line" | "pre-wrap" | "break-spaces"
        )
        .then_some(Whitespace),
        "wrap" => matches!(value, "break-word" | "anywhere" | "normal").then_some(Wrap),
        "hyphens" => matches!(value, "none" | "manual" | "auto").then_some(Hyphens),

        // Backgrounds and gradients
        "bg" => bg_group(value),
        "from" => gradient_stop(value, GradientFromPos, GradientFrom),
        "via" => gradient_stop(value, GradientViaPos, GradientVia),
        "to" => gradient_stop(value, GradientToPos, GradientTo),

        // Borders
        "rounded" => rounded_group(value),
        "border" => border_group(value),
        "divide" => divide_group(value),
        "outline" => match value {
            "solid" | "dashed" | "dotted" | "double" | "none" | "hidden" => Some(OutlineStyle),
            _ if is_number(value) || is_arbitrary_length(value) => Some(OutlineW),
            _ => match value.strip_prefix("offset-") {
                Some(offset) => (is_number(offset) || is_arbitrary(offset)).then_some(OutlineOffset),
                None => Some(OutlineColor),
            },
        },

        // Effects
        "shadow" => (value == "none" || is_tshirt_size(value) || is_arbitrary_shadow(value))
            .then_some(Shadow)
            .or(Some(ShadowColor)),
        "ring" => match value.strip_prefix("offset-") {
            Some(offset) if is_number(offset) || is_arbitrary_length(offset) => Some(RingOffsetW),
            Some(_) => Some(RingOffsetColor),
            None if is_number(value) || is_arbitrary_length(value) => Some(RingW),
            None => Some(RingColor),
        },
        "opacity" => (is_number(value) || is_percent(value) || is_arbitrary(value))
            .then_some(Opacity),
        "mix" => {
            let mode = value.strip_prefix("blend-")?;
            (is_blend_mode(mode) || mode == "plus-darker" || mode == "plus-lighter")
                .then_some(MixBlend)
        }
        "mask" => mask_group(value),

        // Filters
        "filter" => (value == "none").then_some(Filter),
        "blur" => is_blur(value).then_some(Blur),
        "brightness" => is_amount(value).then_some(Brightness),
        "contrast" => is_amount(value).then_some(Contrast),
        "grayscale" => is_amount(value).then_some(Grayscale),
        "invert" => is_amount(value).then_some(Invert),
        "saturate" => is_amount(value).then_some(Saturate),
        "sepia" => is_amount(value).then_some(Sepia),
        "hue" => {
            let degrees = value.strip_prefix("rotate-")?;
            is_amount(degrees).then_some(HueRotate)
        }
        "drop" => {
            let shadow = value.strip_prefix("shadow-")?;
            (shadow == "none" || is_tshirt_size(shadow) || is_arbitrary_shadow(shadow))
                .then_some(DropShadow)
                .or(Some(DropShadowColor))
        }
        "backdrop" => backdrop_group(value),

        // Tables
        "table" => matches!(value, "auto" | "fixed").then_some(TableLayout),
        "caption" => matches!(value, "top" | "bottom").then_some(CaptionSide),

        // Transitions and animation
        "transition" => match value {
            "none" | "all" | "colors" | "opacity" | "shadow" | "transform" => Some(Transition),
            "normal" | "discrete" => Some(TransitionBehavior),
            _ if is_arbitrary(value) => Some(Transition),
            _ => None,
        },
        "duration" => (value == "initial" || is_number(value) || is_arbitrary(value))
            .then_some(Duration),
        "delay" => (is_number(value) || is_arbitrary(value)).then_some(Delay),
        "ease" => (matches!(value, "linear" | "in" | "out" | "in-out" | "initial")
            || is_arbitrary(value))
        .then_some(Ease),
        "animate" => (matches!(value, "none" | "spin" | "ping" | "pulse" | "bounce")
            || is_arbitrary(value))
        .then_some(Animate),

        // Transforms
        "backface" => matches!(value, "visible" | "hidden").then_some(Backface),
        "perspective" => match value.strip_prefix("origin-") {
            Some(origin) => (is_origin(origin) || is_arbitrary(origin)).then_some(PerspectiveOrigin),
            None => (matches!(
                value,
                "dramatic" | "near" | "normal" | "midrange" | "distant" | "none"
            ) || is_arbitrary(value))
            .then_some(Perspective),
        },
        "rotate" => transform_axis(value, [RotateX, RotateY, RotateZ], Rotate, is_angle),
        "scale" => match value {
            "3d" => Some(Scale3d),
            _ => transform_axis(value, [ScaleX, ScaleY, ScaleZ], Scale, |v| {
                v == "none" || is_number(v) || is_percent(v) || is_arbitrary(v)
            }),
        },
        "skew" => match value.split_once('-') {
            Some(("x", amount)) if is_angle(amount) => Some(SkewX),
            Some(("y", amount)) if is_angle(amount) => Some(SkewY),
            _ => is_angle(value).then_some(Skew),
        },
        "translate" => match value {
            "none" => Some(TranslateNone),
            _ => transform_axis(
                value,
                [TranslateX, TranslateY, TranslateZ],
                Translate,
                is_translate,
            ),
        },
        "origin" => (is_origin(value) || is_arbitrary(value)).then_some(TransformOrigin),
        "transform" => match value {
            "3d" | "flat" => Some(TransformStyle),
            "cpu" | "gpu" | "none" => Some(Transform),
            _ if is_arbitrary(value) => Some(Transform),
            _ => None,
        },

        // Interactivity
        "accent" => Some(AccentColor),
        "appearance" => matches!(value, "none" | "auto").then_some(Appearance),
        "caret" => Some(CaretColor),
        "placeholder" => Some(PlaceholderColor),
        "scheme" => matches!(
            value,
            "normal" | "dark" | "light" | "light-dark" | "only-dark" | "only-light"
        )
        .then_some(ColorScheme),
        "cursor" => (is_cursor(value) || is_arbitrary(value)).then_some(Cursor),
        "field" => matches!(value, "sizing-fixed" | "sizing-content").then_some(FieldSizing),
        "pointer" => matches!(value, "events-auto" | "events-none").then_some(PointerEvents),
        "resize" => matches!(value, "none" | "x" | "y").then_some(Resize),
        "scroll" => scroll_group(value),
        "snap" => match value {
            "start" | "end" | "center" | "align-none" => Some(SnapAlign),
            "normal" | "always" => Some(SnapStop),
            "none" | "x" | "y" | "both" => Some(SnapType),
            "mandatory" | "proximity" => Some(SnapStrictness),
            _ => None,
        },
        "touch" => match value {
            "auto" | "none" | "manipulation" => Some(Touch),
            "pan-x" | "pan-left" | "pan-right" => Some(TouchX),
            "pan-y" | "pan-up" | "pan-down" => Some(TouchY),
            "pinch-zoom" => Some(TouchPz),
            _ => None,
        },
        "select" => matches!(value, "none" | "text" | "all" | "auto").then_some(UserSelect),
        "will" => {
            let property = value.strip_prefix("change-")?;
            (matches!(property, "auto" | "scroll" | "contents" | "transform")
                || is_arbitrary(property))
            .then_some(WillChange)
        }

        // SVG
        "fill" => Some(Fill),
        "stroke" => (is_number(value) || is_arbitrary_length(value) || is_arbitrary_number(value))
            .then_some(StrokeW)
            .or(Some(Stroke)),

        // Accessibility
        "forced" => matches!(value, "color-adjust-auto" | "color-adjust-none")
            .then_some(ForcedColorAdjust),

        _ => None,
    }
}

fn is_spacing(value: &str) -> bool {
    value == "px" || is_number(value) || is_arbitrary(value)
}

fn is_margin(value: &str) -> bool {
    value == "auto" || is_spacing(value)
}

fn is_inset(value: &str) -> bool {
    matches!(value, "auto" | "full") || is_fraction(value) || is_spacing(value)
}

fn is_sizing(value: &str) -> bool {
    matches!(
        value,
        "auto"
            | "full"
            | "screen"
            | "svw"
            | "lvw"
            | "dvw"
            | "svh"
            | "lvh"
            | "dvh"
            | "min"
            | "max"
            | "fit"
            | "lh"
    ) || is_fraction(value)
        || is_spacing(value)
}

fn is_translate(value: &str) -> bool {
    value == "full" || is_fraction(value) || is_spacing(value)
}

fn is_angle(value: &str) -> bool {
    value == "none" || is_number(value) || is_arbitrary(value)
}

fn is_amount(value: &str) -> bool {
    is_number(value) || is_percent(value) || is_arbitrary(value)
}

fn is_blur(value: &str) -> bool {
    value == "none" || is_tshirt_size(value) || is_arbitrary(value)
}

fn is_position(value: &str) -> bool {
    matches!(
        value,
        "bottom"
            | "center"
            | "left"
            | "left-bottom"
            | "left-top"
            | "right"
            | "right-bottom"
            | "right-top"
            | "top"
            | "top-left"
            | "top-right"
            | "bottom-left"
            | "bottom-right"
    )
}

fn is_origin(value: &str) -> bool {
    is_position(value)
}

fn is_blend_mode(value: &str) -> bool {
    matches!(
        value,
        "normal"
            | "multiply"
            | "screen"
            | "overlay"
            | "darken"
            | "lighten"
            | "color-dodge"
            | "color-burn"
            | "hard-light"
            | "soft-light"
            | "difference"
            | "exclusion"
            | "hue"
            | "saturation"
            | "color"
            | "luminosity"
    )
}

fn is_cursor(value: &str) -> bool {
    matches!(
        value,
        "auto"
            | "default"
            | "pointer"
            | "wait"
            | "text"
            | "move"
            | "help"
            | "not-allowed"
            | "none"
            | "context-menu"
            | "progress"
            | "cell"
            | "crosshair"
            | "vertical-text"
            | "alias"
            | "copy"
            | "no-drop"
            | "grab"
            | "grabbing"
            | "all-scroll"
            | "col-resize"
            | "row-resize"
            | "n-resize"
            | "e-resize"
            | "s-resize"
            | "w-resize"
            | "ne-resize"
            | "nw-resize"
            | "se-resize"
            | "sw-resize"
            | "ew-resize"
            | "ns-resize"
            | "nesw-resize"
            | "nwse-resize"
            | "zoom-in"
            | "zoom-out"
    )
}

/// `overflow-auto` / `overflow-x-auto` / `overflow-y-auto` style utilities.
fn axis_group(
    value: &str,
    both: ClassGroup,
    x: ClassGroup,
    y: ClassGroup,
    valid: impl Fn(&str) -> bool,
) -> Option<ClassGroup> {
    match value.split_once('-') {
        Some(("x", rest)) if valid(rest) => Some(x),
        Some(("y", rest)) if valid(rest) => Some(y),
        _ => valid(value).then_some(both),
    }
}

/// `rotate-45` / `rotate-x-45` / `rotate-y-45` / `rotate-z-45` style utilities.
fn transform_axis(
    value: &str,
    [x, y, z]: [ClassGroup; 3],
    all: ClassGroup,
    valid: impl Fn(&str) -> bool,
) -> Option<ClassGroup> {
    match value.split_once('-') {
        Some(("x", amount)) if valid(amount) => Some(x),
        Some(("y", amount)) if valid(amount) => Some(y),
        Some(("z", amount)) if valid(amount) => Some(z),
        _ => valid(value).then_some(all),
    }
}

fn break_group(value: &str) -> Option<ClassGroup> {
    const PAGE_BREAKS: &[&str] = &[
        "auto", "avoid", "all", "avoid-page", "page", "left", "right", "column",
    ];
    if let Some(position) = value.strip_prefix("after-") {
        return PAGE_BREAKS.contains(&position).then_some(BreakAfter);
    }
    if let Some(position) = value.strip_prefix("before-") {
        return PAGE_BREAKS.contains(&position).then_some(BreakBefore);
    }
    if let Some(position) = value.strip_prefix("inside-") {
        return matches!(position, "auto" | "avoid" | "avoid-page" | "avoid-column")
            .then_some(BreakInside);
    }
    matches!(value, "normal" | "words" | "all" | "keep").then_some(WordBreak)
}

fn inset_group(value: &str) -> Option<ClassGroup> {
    if value == "ring" {
        return Some(InsetRingW);
    }
    if let Some(ring) = value.strip_prefix("ring-") {
        return if is_number(ring) || is_arbitrary_length(ring) {
            Some(InsetRingW)
        } else {
            Some(InsetRingColor)
        };
    }
    if let Some(shadow) = value.strip_prefix("shadow-") {
        return if shadow == "none" || is_tshirt_size(shadow) || is_arbitrary_shadow(shadow) {
            Some(InsetShadow)
        } else {
            Some(InsetShadowColor)
        };
    }
    axis_group(value, Inset, InsetX, InsetY, is_inset)
}

fn grid_group(value: &str) -> Option<ClassGroup> {
    let (kind, rest) = value.split_once('-')?;
    match kind {
        "cols" | "rows" => {
            let valid = matches!(rest, "none" | "subgrid") || is_integer(rest) || is_arbitrary(rest);
            match kind {
                "cols" => valid.then_some(GridCols),
                _ => valid.then_some(GridRows),
            }
        }
        "flow" => matches!(rest, "row" | "col" | "dense" | "row-dense" | "col-dense")
            .then_some(GridFlow),
        _ => None,
    }
}

/// `col-span-2`, `col-start-1`, `col-end-3`, `col-2` and their `row-*` twins.
fn line_group(
    value: &str,
    span: ClassGroup,
    start: ClassGroup,
    end: ClassGroup,
    line: ClassGroup,
) -> Option<ClassGroup> {
    if let Some(count) = value.strip_prefix("span-") {
        return (count == "full" || is_integer(count) || is_arbitrary(count)).then_some(span);
    }
    let is_line = |v: &str| v == "auto" || is_integer(v) || is_arbitrary(v);
    if let Some(position) = value.strip_prefix("start-") {
        return is_line(position).then_some(start);
    }
    if let Some(position) = value.strip_prefix("end-") {
        return is_line(position).then_some(end);
    }
    is_line(value).then_some(line)
}

fn justify_group(value: &str) -> Option<ClassGroup> {
    if let Some(items) = value.strip_prefix("items-") {
        return matches!(
            items,
            "start" | "end" | "end-safe" | "center" | "center-safe" | "stretch" | "normal"
        )
        .then_some(JustifyItems);
    }
    if let Some(this) = value.strip_prefix("self-") {
        return matches!(
            this,
            "auto" | "start" | "end" | "end-safe" | "center" | "center-safe" | "stretch"
        )
        .then_some(JustifySelf);
    }
    matches!(
        value,
        "normal"
            | "start"
            | "end"
            | "end-safe"
            | "center"
            | "center-safe"
            | "between"
            | "around"
            | "evenly"
            | "stretch"
            | "baseline"
    )
    .then_some(JustifyContent)
}

fn place_group(value: &str) -> Option<ClassGroup> {
    let alignments = |v: &str| {
        matches!(
            v,
            "start"
                | "end"
                | "end-safe"
                | "center"
                | "center-safe"
                | "stretch"
                | "baseline"
                | "between"
                | "around"
                | "evenly"
                | "auto"
        )
    };
    match value.split_once('-')? {
        ("content", rest) if alignments(rest) => Some(PlaceContent),
        ("items", rest) if alignments(rest) => Some(PlaceItems),
        ("self", rest) if alignments(rest) => Some(PlaceSelf),
        _ => None,
    }
}

fn text_group(value: &str) -> Option<ClassGroup> {
    if value == "shadow" {
        return Some(TextShadow);
    }
    if let Some(shadow) = value.strip_prefix("shadow-") {
        return if shadow == "none" || is_tshirt_size(shadow) || is_arbitrary_shadow(shadow) {
            Some(TextShadow)
        } else {
            Some(TextShadowColor)
        };
    }
    let group = match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => TextAlign,
        "ellipsis" | "clip" => TextOverflow,
        "wrap" | "nowrap" | "balance" | "pretty" => TextWrap,
        "base" => FontSize,
        _ if is_tshirt_size(value) || is_arbitrary_length(value) => FontSize,
        _ => TextColor,
    };
    Some(group)
}

fn font_group(value: &str) -> Option<ClassGroup> {
    if let Some(stretch) = value.strip_prefix("stretch-") {
        return (matches!(
            stretch,
            "ultra-condensed"
                | "extra-condensed"
                | "condensed"
                | "semi-condensed"
                | "normal"
                | "semi-expanded"
                | "expanded"
                | "extra-expanded"
                | "ultra-expanded"
        ) || is_percent(stretch)
            || is_arbitrary(stretch))
        .then_some(FontStretch);
    }
    let group = match value {
        "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold"
        | "extrabold" | "black" => FontWeight,
        _ if is_arbitrary_weight(value) => FontWeight,
        _ if is_arbitrary_family_name(value) => FontFamily,
        // Unlabeled variables are read as weights
        _ if value.starts_with('(') && !value.contains(':') => FontWeight,
        _ => FontFamily,
    };
    Some(group)
}

fn bg_group(value: &str) -> Option<ClassGroup> {
    let group = match value {
        "fixed" | "local" | "scroll" => BgAttachment,
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            BgRepeat
        }
        "auto" | "cover" | "contain" => BgSize,
        "none" | "linear" | "radial" | "conic" => BgImage,
        _ if is_position(value) => BgPosition,
        _ => {
            if let Some(clip) = value.strip_prefix("clip-") {
                return matches!(clip, "border" | "padding" | "content" | "text")
                    .then_some(BgClip);
            }
            if let Some(origin) = value.strip_prefix("origin-") {
                return matches!(origin, "border" | "padding" | "content").then_some(BgOrigin);
            }
            if let Some(mode) = value.strip_prefix("blend-") {
                return is_blend_mode(mode).then_some(BgBlend);
            }
            if let Some(size) = value.strip_prefix("size-") {
                return is_arbitrary(size).then_some(BgSize);
            }
            if let Some(position) = value.strip_prefix("position-") {
                return is_arbitrary(position).then_some(BgPosition);
            }
            if ["linear-", "radial-", "conic-"]
                .iter()
                .any(|gradient| value.starts_with(gradient))
            {
                return Some(BgImage);
            }
            if is_arbitrary_image(value) {
                BgImage
            } else if is_arbitrary_position(value) {
                BgPosition
            } else if is_arbitrary_size(value) || is_arbitrary_length(value) {
                BgSize
            } else {
                BgColor
            }
        }
    };
    Some(group)
}

fn gradient_stop(value: &str, position: ClassGroup, color: ClassGroup) -> Option<ClassGroup> {
    if is_percent(value) || is_arbitrary_length(value) || is_arbitrary_position(value) {
        Some(position)
    } else {
        Some(color)
    }
}

fn is_radius(value: &str) -> bool {
    matches!(value, "none" | "full") || is_tshirt_size(value) || is_arbitrary(value)
}

fn rounded_group(value: &str) -> Option<ClassGroup> {
    const CORNERS: &[(&str, ClassGroup)] = &[
        ("s", RoundedS),
        ("e", RoundedE),
        ("t", RoundedT),
        ("r", RoundedR),
        ("b", RoundedB),
        ("l", RoundedL),
        ("ss", RoundedSs),
        ("se", RoundedSe),
        ("ee", RoundedEe),
        ("es", RoundedEs),
        ("tl", RoundedTl),
        ("tr", RoundedTr),
        ("br", RoundedBr),
        ("bl", RoundedBl),
    ];
    for (corner, group) in CORNERS {
        if value == *corner {
            return Some(*group);
        }
        if let Some(radius) = value
            .strip_prefix(corner)
            .and_then(|rest| rest.strip_prefix('-'))
        {
            return is_radius(radius).then_some(*group);
        }
    }
    is_radius(value).then_some(Rounded)
}

fn is_border_width(value: &str) -> bool {
    is_number(value) || is_arbitrary_length(value)
}

fn is_line_style(value: &str) -> bool {
    matches!(value, "solid" | "dashed" | "dotted" | "double" | "hidden" | "none")
}

fn border_group(value: &str) -> Option<ClassGroup> {
    const SIDES: &[(&str, ClassGroup, ClassGroup)] = &[
        ("x", BorderWX, BorderColorX),
        ("y", BorderWY, BorderColorY),
        ("s", BorderWS, BorderColorS),
        ("e", BorderWE, BorderColorE),
        ("t", BorderWT, BorderColorT),
        ("r", BorderWR, BorderColorR),
        ("b", BorderWB, BorderColorB),
        ("l", BorderWL, BorderColorL),
    ];
    match value {
        "collapse" | "separate" => return Some(BorderCollapse),
        _ if is_line_style(value) => return Some(BorderStyle),
        _ => {}
    }
    if let Some(spacing) = value.strip_prefix("spacing-") {
        return axis_group(
            spacing,
            BorderSpacing,
            BorderSpacingX,
            BorderSpacingY,
            is_spacing,
        );
    }
    if let Some((side, rest)) = value.split_once('-') {
        if let Some((_, width, color)) = SIDES.iter().find(|(name, ..)| *name == side) {
            return if is_border_width(rest) {
                Some(*width)
            } else {
                Some(*color)
            };
        }
    }
    if is_border_width(value) {
        Some(BorderW)
    } else {
        Some(BorderColor)
    }
}

fn divide_group(value: &str) -> Option<ClassGroup> {
    match value {
        "x-reverse" => return Some(DivideXReverse),
        "y-reverse" => return Some(DivideYReverse),
        _ if is_line_style(value) => return Some(DivideStyle),
        _ => {}
    }
    match value.split_once('-') {
        Some(("x", width)) if is_border_width(width) => Some(DivideX),
        Some(("y", width)) if is_border_width(width) => Some(DivideY),
        _ => Some(DivideColor),
    }
}

fn is_mask_box(value: &str) -> bool {
    matches!(
        value,
        "border" | "padding" | "content" | "fill" | "stroke" | "view"
    )
}

/// `from-*` / `to-*` stops of a mask gradient, split into position and color
/// groups like the background gradient stops.
fn mask_stop(
    value: &str,
    [from_pos, from_color, to_pos, to_color]: [ClassGroup; 4],
) -> Option<ClassGroup> {
    let is_stop_position = |v: &str| {
        is_number(v) || is_percent(v) || is_arbitrary_length(v) || is_arbitrary_position(v)
    };
    if let Some(stop) = value.strip_prefix("from-") {
        return Some(if is_stop_position(stop) { from_pos } else { from_color });
    }
    if let Some(stop) = value.strip_prefix("to-") {
        return Some(if is_stop_position(stop) { to_pos } else { to_color });
    }
    None
}

fn mask_group(value: &str) -> Option<ClassGroup> {
    let group = match value {
        "add" | "subtract" | "intersect" | "exclude" => MaskComposite,
        "alpha" | "luminance" | "match" => MaskMode,
        "type-alpha" | "type-luminance" => MaskType,
        "none" => MaskImage,
        "radial" => MaskImageRadial,
        "auto" | "cover" | "contain" => MaskSize,
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            MaskRepeat
        }
        "no-clip" => MaskClip,
        _ if is_position(value) => MaskPosition,
        _ => return mask_layer_group(value),
    };
    Some(group)
}

/// Mask layers, gradient masks and mask placement.
fn mask_layer_group(value: &str) -> Option<ClassGroup> {
    const EDGES: &[(&str, [ClassGroup; 4])] = &[
        ("t", [MaskImageTFromPos, MaskImageTFromColor, MaskImageTToPos, MaskImageTToColor]),
        ("r", [MaskImageRFromPos, MaskImageRFromColor, MaskImageRToPos, MaskImageRToColor]),
        ("b", [MaskImageBFromPos, MaskImageBFromColor, MaskImageBToPos, MaskImageBToColor]),
        ("l", [MaskImageLFromPos, MaskImageLFromColor, MaskImageLToPos, MaskImageLToColor]),
        ("x", [MaskImageXFromPos, MaskImageXFromColor, MaskImageXToPos, MaskImageXToColor]),
        ("y", [MaskImageYFromPos, MaskImageYFromColor, MaskImageYToPos, MaskImageYToColor]),
    ];
    if let Some(clip) = value.strip_prefix("clip-") {
        return is_mask_box(clip).then_some(MaskClip);
    }
    if let Some(origin) = value.strip_prefix("origin-") {
        return is_mask_box(origin).then_some(MaskOrigin);
    }
    if let Some(position) = value.strip_prefix("position-") {
        return is_arbitrary(position).then_some(MaskPosition);
    }
    if let Some(size) = value.strip_prefix("size-") {
        return is_arbitrary(size).then_some(MaskSize);
    }
    if let Some(linear) = value.strip_prefix("linear-") {
        let stops = [
            MaskImageLinearFromPos,
            MaskImageLinearFromColor,
            MaskImageLinearToPos,
            MaskImageLinearToColor,
        ];
        return mask_stop(linear, stops)
            .or_else(|| (is_number(linear) || is_arbitrary(linear)).then_some(MaskImageLinearPos));
    }
    if let Some(radial) = value.strip_prefix("radial-") {
        let stops = [
            MaskImageRadialFromPos,
            MaskImageRadialFromColor,
            MaskImageRadialToPos,
            MaskImageRadialToColor,
        ];
        if let Some(group) = mask_stop(radial, stops) {
            return Some(group);
        }
        return match radial {
            "circle" | "ellipse" => Some(MaskImageRadialShape),
            "closest-side" | "closest-corner" | "farthest-side" | "farthest-corner" => {
                Some(MaskImageRadialSize)
            }
            _ => match radial.strip_prefix("at-") {
                Some(at) => (is_position(at) || is_arbitrary(at)).then_some(MaskImageRadialPos),
                None => is_arbitrary(radial).then_some(MaskImageRadial),
            },
        };
    }
    if let Some(conic) = value.strip_prefix("conic-") {
        let stops = [
            MaskImageConicFromPos,
            MaskImageConicFromColor,
            MaskImageConicToPos,
            MaskImageConicToColor,
        ];
        return mask_stop(conic, stops)
            .or_else(|| (is_number(conic) || is_arbitrary(conic)).then_some(MaskImageConicPos));
    }
    if let Some((edge, stop)) = value.split_once('-') {
        if let Some((_, stops)) = EDGES.iter().find(|(name, _)| *name == edge) {
            return mask_stop(stop, *stops);
        }
    }
    if is_arbitrary_position(value) {
        Some(MaskPosition)
    } else if is_arbitrary_size(value) {
        Some(MaskSize)
    } else {
        is_arbitrary(value).then_some(MaskImage)
    }
}

fn backdrop_group(value: &str) -> Option<ClassGroup> {
    match value {
        "filter" => return Some(BackdropFilter),
        "blur" => return Some(BackdropBlur),
        "grayscale" => return Some(BackdropGrayscale),
        "invert" => return Some(BackdropInvert),
        "sepia" => return Some(BackdropSepia),
        _ => {}
    }
    if let Some(filter) = value.strip_prefix("filter-") {
        return (filter == "none").then_some(BackdropFilter);
    }
    if let Some(degrees) = value.strip_prefix("hue-rotate-") {
        return is_amount(degrees).then_some(BackdropHueRotate);
    }
    let (filter, amount) = value.split_once('-')?;
    match filter {
        "blur" => is_blur(amount).then_some(BackdropBlur),
        "brightness" => is_amount(amount).then_some(BackdropBrightness),
        "contrast" => is_amount(amount).then_some(BackdropContrast),
        "grayscale" => is_amount(amount).then_some(BackdropGrayscale),
        "invert" => is_amount(amount).then_some(BackdropInvert),
        "opacity" => is_amount(amount).then_some(BackdropOpacity),
        "saturate" => is_amount(amount).then_some(BackdropSaturate),
        "sepia" => is_amount(amount).then_some(BackdropSepia),
        _ => None,
    }
}

fn scroll_group(value: &str) -> Option<ClassGroup> {
    const SCROLL_SPACING: &[(&str, ClassGroup)] = &[
        ("m", ScrollM),
        ("mx", ScrollMx),
        ("my", ScrollMy),
        ("ms", ScrollMs),
        ("me", ScrollMe),
        ("mt", ScrollMt),
        ("mr", ScrollMr),
        ("mb", ScrollMb),
        ("ml", ScrollMl),
        ("p", ScrollP),
        ("px", ScrollPx),
        ("py", ScrollPy),
        ("ps", ScrollPs),
        ("pe", ScrollPe),
        ("pt", ScrollPt),
        ("pr", ScrollPr),
        ("pb", ScrollPb),
        ("pl", ScrollPl),
    ];
    if matches!(value, "auto" | "smooth") {
        return Some(ScrollBehavior);
    }
    let (side, amount) = value.split_once('-')?;
    SCROLL_SPACING
        .iter()
        .find(|(name, _)| *name == side)
        .and_then(|(_, group)| is_spacing(amount).then_some(*group))
}

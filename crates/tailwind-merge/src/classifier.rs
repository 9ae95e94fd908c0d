use crate::class_groups::{ClassGroup, get_class_group};

/// Identifies the conflict group a class belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupId<'a> {
    /// A built-in Tailwind utility group
    Tailwind(ClassGroup),
    /// An arbitrary property class such as `[paint-order:normal]`, keyed by property name
    ArbitraryProperty(&'a str),
    /// A group defined by a lookup table
    Custom(&'a str),
}

/// Decides which conflict group a class belongs to.
///
/// `classify` receives the base class only: variants (`hover:`), the
/// important marker and any postfix modifier (`/50`) have already been
/// stripped by the merger.
pub trait Classifier {
    fn classify<'a>(&'a self, class: &'a str) -> Option<GroupId<'a>>;

    /// Groups that a class of `group` overrides when it appears later.
    fn conflicts<'a>(&'a self, _group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        Vec::new()
    }

    /// Extra groups overridden when the class carries a postfix modifier.
    fn postfix_conflicts<'a>(&'a self, _group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        Vec::new()
    }
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn classify<'a>(&'a self, class: &'a str) -> Option<GroupId<'a>> {
        (**self).classify(class)
    }

    fn conflicts<'a>(&'a self, group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        (**self).conflicts(group)
    }

    fn postfix_conflicts<'a>(&'a self, group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        (**self).postfix_conflicts(group)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn classify<'a>(&'a self, class: &'a str) -> Option<GroupId<'a>> {
        (**self).classify(class)
    }

    fn conflicts<'a>(&'a self, group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        (**self).conflicts(group)
    }

    fn postfix_conflicts<'a>(&'a self, group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        (**self).postfix_conflicts(group)
    }
}

/// The built-in Tailwind CSS v4 classification.
#[derive(Clone, Copy, Debug, Default)]
pub struct TailwindClassifier;

impl Classifier for TailwindClassifier {
    fn classify<'a>(&'a self, class: &'a str) -> Option<GroupId<'a>> {
        get_class_group(class).map(GroupId::Tailwind)
    }

    fn conflicts<'a>(&'a self, group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        match group {
            GroupId::Tailwind(group) => get_conflicts(*group)
                .iter()
                .copied()
                .map(GroupId::Tailwind)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn postfix_conflicts<'a>(&'a self, group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        match group {
            // `text-lg/7` sets the line height too
            GroupId::Tailwind(ClassGroup::FontSize) => {
                vec![GroupId::Tailwind(ClassGroup::Leading)]
            }
            _ => Vec::new(),
        }
    }
}

/// Get the class groups that conflict with a given group
fn get_conflicts(group: ClassGroup) -> &'static [ClassGroup] {
    use ClassGroup::*;
    match group {
        // Margin conflicts
        Margin => &[
            MarginX, MarginY, MarginS, MarginE, MarginT, MarginR, MarginB, MarginL,
        ],
        MarginX => &[MarginR, MarginL],
        MarginY => &[MarginT, MarginB],

        // Padding conflicts
        Padding => &[
            PaddingX, PaddingY, PaddingS, PaddingE, PaddingT, PaddingR, PaddingB, PaddingL,
        ],
        PaddingX => &[PaddingR, PaddingL],
        PaddingY => &[PaddingT, PaddingB],

        // Inset conflicts
        Inset => &[InsetX, InsetY, Start, End, Top, Right, Bottom, Left],
        InsetX => &[Right, Left],
        InsetY => &[Top, Bottom],

        Overflow => &[OverflowX, OverflowY],
        Overscroll => &[OverscrollX, OverscrollY],
        BorderSpacing => &[BorderSpacingX, BorderSpacingY],
        Size => &[Width, Height],
        Gap => &[GapX, GapY],
        Flex => &[Basis, Grow, Shrink],

        // Border width conflicts
        BorderW => &[
            BorderWX, BorderWY, BorderWS, BorderWE, BorderWT, BorderWR, BorderWB, BorderWL,
        ],
        BorderWX => &[BorderWR, BorderWL],
        BorderWY => &[BorderWT, BorderWB],

        // Border color conflicts
        BorderColor => &[
            BorderColorX,
            BorderColorY,
            BorderColorS,
            BorderColorE,
            BorderColorT,
            BorderColorR,
            BorderColorB,
            BorderColorL,
        ],
        BorderColorX => &[BorderColorR, BorderColorL],
        BorderColorY => &[BorderColorT, BorderColorB],

        // Font variant numeric conflicts
        FvnNormal => &[
            FvnOrdinal,
            FvnSlashedZero,
            FvnFigure,
            FvnSpacing,
            FvnFraction,
        ],
        FvnOrdinal | FvnSlashedZero | FvnFigure | FvnSpacing | FvnFraction => &[FvnNormal],

        // Touch conflicts
        Touch => &[TouchX, TouchY, TouchPz],
        TouchX | TouchY | TouchPz => &[Touch],

        LineClamp => &[Display, Overflow],

        // Grid column/row conflicts
        ColSpan => &[Col],
        Col => &[ColSpan],
        RowSpan => &[Row],
        Row => &[RowSpan],

        // Rounded conflicts
        Rounded => &[
            RoundedS, RoundedE, RoundedT, RoundedR, RoundedB, RoundedL, RoundedSs, RoundedSe,
            RoundedEe, RoundedEs, RoundedTl, RoundedTr, RoundedBr, RoundedBl,
        ],
        RoundedS => &[RoundedSs, RoundedEs],
        RoundedE => &[RoundedSe, RoundedEe],
        RoundedT => &[RoundedTl, RoundedTr],
        RoundedR => &[RoundedTr, RoundedBr],
        RoundedB => &[RoundedBr, RoundedBl],
        RoundedL => &[RoundedTl, RoundedBl],

        // Translate conflicts
        Translate => &[TranslateX, TranslateY, TranslateNone],
        TranslateNone => &[Translate, TranslateX, TranslateY, TranslateZ],

        // Scroll margin conflicts
        ScrollM => &[
            ScrollMx, ScrollMy, ScrollMs, ScrollMe, ScrollMt, ScrollMr, ScrollMb, ScrollMl,
        ],
        ScrollMx => &[ScrollMr, ScrollMl],
        ScrollMy => &[ScrollMt, ScrollMb],

        // Scroll padding conflicts
        ScrollP => &[
            ScrollPx, ScrollPy, ScrollPs, ScrollPe, ScrollPt, ScrollPr, ScrollPb, ScrollPl,
        ],
        ScrollPx => &[ScrollPr, ScrollPl],
        ScrollPy => &[ScrollPt, ScrollPb],

        _ => &[],
    }
}

/// Consults `primary` first and falls back to `fallback` for classes it
/// does not know.
#[derive(Clone, Debug, Default)]
pub struct Layered<A, B> {
    primary: A,
    fallback: B,
}

impl<A: Classifier, B: Classifier> Layered<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: Classifier, B: Classifier> Classifier for Layered<A, B> {
    fn classify<'a>(&'a self, class: &'a str) -> Option<GroupId<'a>> {
        self.primary
            .classify(class)
            .or_else(|| self.fallback.classify(class))
    }

    fn conflicts<'a>(&'a self, group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        let mut conflicts = self.primary.conflicts(group);
        conflicts.extend(self.fallback.conflicts(group));
        conflicts
    }

    fn postfix_conflicts<'a>(&'a self, group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        let mut conflicts = self.primary.postfix_conflicts(group);
        conflicts.extend(self.fallback.postfix_conflicts(group));
        conflicts
    }
}

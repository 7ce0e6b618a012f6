/// Descriptions longer than this many characters start collapsed.
pub const DESCRIPTION_LIMIT: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionState {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    More,
    Less,
}

impl Affordance {
    pub fn label(self) -> &'static str {
        match self {
            Affordance::More => "more",
            Affordance::Less => "less",
        }
    }
}

/// What a card shows for its description in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionView<'a> {
    pub text: &'a str,
    pub affordance: Option<Affordance>,
}

impl DescriptionView<'_> {
    /// Collapsed text is followed by an ellipsis.
    pub fn is_truncated(&self) -> bool {
        self.affordance == Some(Affordance::More)
    }
}

pub fn is_long(description: &str) -> bool {
    description.chars().count() > DESCRIPTION_LIMIT
}

/// First `limit` characters with surrounding whitespace removed.
pub fn truncate(description: &str, limit: usize) -> &str {
    let end = description
        .char_indices()
        .nth(limit)
        .map(|(idx, _)| idx)
        .unwrap_or(description.len());
    description[..end].trim()
}

impl DescriptionState {
    pub fn toggle(&mut self) {
        *self = match self {
            DescriptionState::Collapsed => DescriptionState::Expanded,
            DescriptionState::Expanded => DescriptionState::Collapsed,
        };
    }

    pub fn is_expanded(self) -> bool {
        self == DescriptionState::Expanded
    }

    pub fn view(self, description: &str) -> DescriptionView<'_> {
        if !is_long(description) {
            return DescriptionView {
                text: description,
                affordance: None,
            };
        }

        match self {
            DescriptionState::Collapsed => DescriptionView {
                text: truncate(description, DESCRIPTION_LIMIT),
                affordance: Some(Affordance::More),
            },
            DescriptionState::Expanded => DescriptionView {
                text: description,
                affordance: Some(Affordance::Less),
            },
        }
    }
}

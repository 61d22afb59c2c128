#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    /// Text, possibly spanning several lines separated by `\n`.
    Text(String),
    Children(Vec<super::Element>),
}

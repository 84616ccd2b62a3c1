/// The result of splitting a rule token string.
///
/// `param` is empty when the token carried no bracketed parameter,
/// e.g. `required`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub name: String,
    pub param: String,
}

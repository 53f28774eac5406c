/// Structuring options.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct StructureConfig {
    /// Keep whitespace and comment tokens as leaves. When off, the forest
    /// holds significant tokens only.
    pub keep_trivia: bool,
}

impl StructureConfig {
    /// Lossless: every token becomes a leaf.
    pub const LOSSLESS: StructureConfig = StructureConfig { keep_trivia: true };

    /// Whitespace and comments dropped.
    pub const SIGNIFICANT: StructureConfig = StructureConfig { keep_trivia: false };

    #[must_use]
    pub const fn with_keep_trivia(mut self, keep_trivia: bool) -> Self {
        self.keep_trivia = keep_trivia;
        self
    }
}

impl Default for StructureConfig {
    fn default() -> Self {
        StructureConfig::LOSSLESS
    }
}

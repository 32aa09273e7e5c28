pub trait Normalizer: Send + Sync {
    fn name(&self) -> &'static str;
    fn normalize(&self, raw: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseNormalizer;

impl Normalizer for LowercaseNormalizer {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_text(raw)
    }
}

pub fn normalize_text(input: &str) -> String {
    input.to_lowercase()
}

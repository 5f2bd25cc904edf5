use serde::{Deserialize, Serialize};

/// Options recognised by extraction and strategy conversion.
///
/// Deserializes from the same camelCase shape used in `.htmlkeysrc.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptions {
    #[serde(default)]
    pub parse: ParseOptions,
    /// Prefix converted names with a zero-padded sequence number.
    #[serde(default)]
    pub prefix_sequence: bool,
    /// First number of the sequence.
    #[serde(default)]
    pub prefix_sequence_start: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    /// Extract the `src` of images. When false, images are skipped entirely.
    #[serde(default = "default_images")]
    pub images: bool,
}

fn default_images() -> bool {
    true
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            images: default_images(),
        }
    }
}

impl ExtractOptions {
    pub fn without_images(mut self) -> Self {
        self.parse.images = false;
        self
    }

    pub fn with_prefix_sequence(mut self, start: usize) -> Self {
        self.prefix_sequence = true;
        self.prefix_sequence_start = start;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = ExtractOptions::default();
        assert!(options.parse.images);
        assert!(!options.prefix_sequence);
        assert_eq!(options.prefix_sequence_start, 0);
    }

    #[test]
    fn test_partial_json() {
        let options: ExtractOptions = serde_json::from_str(r#"{ "parse": {} }"#).unwrap();
        assert_eq!(options, ExtractOptions::default());

        let options: ExtractOptions =
            serde_json::from_str(r#"{ "parse": { "images": false }, "prefixSequence": true }"#)
                .unwrap();
        assert!(!options.parse.images);
        assert!(options.prefix_sequence);
    }
}

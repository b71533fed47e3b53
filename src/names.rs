use rand::Rng;
use serde::Deserialize;

/// Shape of the external `names.json` resource.
#[derive(Debug, Deserialize)]
struct NamesData {
    names: Vec<String>,
}

const FALLBACK_NAME: &str = "Anonymous";

/// Display-name provider for autonomous entities.
///
/// Names are cosmetic; the core never consumes them. Hosts load the full
/// list once (the shipped resource has thousands of entries) and draw random
/// names for bots, like the original's fake-player labels.
#[derive(Debug)]
pub struct NameProvider {
    names: Vec<String>,
}

impl NameProvider {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let data: NamesData = serde_json::from_str(json)?;
        Ok(Self { names: data.names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// A random name from the list, or a fixed fallback if the list is empty.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        if self.names.is_empty() {
            return FALLBACK_NAME;
        }
        &self.names[rng.gen_range(0..self.names.len())]
    }
}

impl Default for NameProvider {
    fn default() -> Self {
        Self {
            names: [
                "Ash", "Birch", "Cedar", "Dune", "Ember", "Flint", "Gale", "Harbor", "Iris",
                "Juniper", "Koa", "Lark", "Moss", "North", "Onyx", "Pike", "Quill", "Reed",
                "Sage", "Thorn", "Umber", "Vale", "Wren", "Yarrow", "Zephyr",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_from_json() {
        let provider = NameProvider::from_json_str(r#"{ "names": ["Alice", "Bob"] }"#).unwrap();
        assert_eq!(provider.len(), 2);
        assert!(!provider.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(NameProvider::from_json_str("not json").is_err());
    }

    #[test]
    fn test_pick_is_from_the_list() {
        let provider = NameProvider::from_json_str(r#"{ "names": ["Alice", "Bob"] }"#).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let name = provider.pick(&mut rng);
            assert!(name == "Alice" || name == "Bob");
        }
    }

    #[test]
    fn test_empty_list_falls_back() {
        let provider = NameProvider::from_json_str(r#"{ "names": [] }"#).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(provider.pick(&mut rng), FALLBACK_NAME);
    }

    #[test]
    fn test_default_list_is_usable() {
        let provider = NameProvider::default();
        assert!(!provider.is_empty());
        let mut rng = StdRng::seed_from_u64(7);
        assert!(!provider.pick(&mut rng).is_empty());
    }
}

#![forbid(unsafe_code)]

use rand::seq::SliceRandom;
use rand::Rng;
use silentspeak_contracts::config::AnonymousNames;
use silentspeak_contracts::{ContractViolation, Validate};

pub const NAME_SUFFIX_MAX: u32 = 999;

/// Builds display names like "Gentle River #12".
#[derive(Debug, Clone)]
pub struct AnonymousNameGenerator {
    vocabulary: AnonymousNames,
}

impl AnonymousNameGenerator {
    pub fn new(vocabulary: AnonymousNames) -> Result<Self, ContractViolation> {
        vocabulary.validate()?;
        Ok(Self { vocabulary })
    }

    pub fn generate<R>(&self, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let adjective = pick(&self.vocabulary.adjectives, rng);
        let noun = pick(&self.vocabulary.nouns, rng);
        let suffix = rng.gen_range(1..=NAME_SUFFIX_MAX);
        format!("{adjective} {noun} #{suffix}")
    }
}

// Lists are validated non-empty at construction.
fn pick<'a, R>(words: &'a [String], rng: &mut R) -> &'a str
where
    R: Rng + ?Sized,
{
    words.choose(rng).map_or("", String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vocabulary() -> AnonymousNames {
        AnonymousNames {
            adjectives: vec!["Gentle".to_string(), "Brave".to_string()],
            nouns: vec!["River".to_string(), "Star".to_string()],
        }
    }

    #[test]
    fn at_names_01_generated_name_has_adjective_noun_and_suffix() {
        let generator = AnonymousNameGenerator::new(vocabulary()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..64 {
            let name = generator.generate(&mut rng);
            let (words, suffix) = name.split_once(" #").unwrap();
            let (adjective, noun) = words.split_once(' ').unwrap();
            assert!(["Gentle", "Brave"].contains(&adjective));
            assert!(["River", "Star"].contains(&noun));
            let n: u32 = suffix.parse().unwrap();
            assert!((1..=NAME_SUFFIX_MAX).contains(&n));
        }
    }

    #[test]
    fn at_names_02_empty_vocabulary_is_rejected() {
        let empty = AnonymousNames {
            adjectives: vec![],
            nouns: vec!["River".to_string()],
        };
        assert!(AnonymousNameGenerator::new(empty).is_err());
    }
}

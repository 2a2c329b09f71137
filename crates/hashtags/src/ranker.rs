//! Relevance ranking.

use crate::candidate::HashtagCandidate;
use crate::platform::Platform;
use crate::tables::{TagSeed, base_table, platform_table};

/// Suggest hashtags for `content` on the platform identified by `platform`.
///
/// The result is the base table plus the platform's own table, sorted by
/// relevance, highest first. An unrecognized platform id adds no
/// platform-specific tags. Relevance scores are fixed per tag, so `content`
/// does not affect the output. Truncating to a maximum count is left to the
/// caller.
#[must_use]
pub fn generate_hashtags(content: &str, platform: &str) -> Vec<HashtagCandidate> {
    let parsed = platform.parse::<Platform>().ok();
    if parsed.is_none() {
        tracing::debug!(platform = %platform, "No platform-specific hashtags");
    }
    generate(content, parsed)
}

/// Typed variant of [`generate_hashtags`].
#[must_use]
pub fn generate_hashtags_for(content: &str, platform: Platform) -> Vec<HashtagCandidate> {
    generate(content, Some(platform))
}

fn generate(content: &str, platform: Option<Platform>) -> Vec<HashtagCandidate> {
    let extra: &[TagSeed] = platform.map_or(&[][..], platform_table);

    let candidates = base_table()
        .iter()
        .chain(extra)
        .map(|seed| seed.to_candidate())
        .collect();

    let ranked = rank(candidates);
    tracing::debug!(
        platform = ?platform,
        content_len = content.len(),
        count = ranked.len(),
        "Generated hashtag candidates"
    );
    ranked
}

/// Sort candidates by relevance, highest first.
///
/// The sort is stable: candidates with equal relevance keep their input
/// order. Duplicate tags are kept, since callers may address entries by
/// position.
#[must_use]
pub fn rank(mut candidates: Vec<HashtagCandidate>) -> Vec<HashtagCandidate> {
    candidates.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    candidates
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::candidate::Competition;

    fn assert_sorted(candidates: &[HashtagCandidate]) {
        for pair in candidates.windows(2) {
            assert!(
                pair[0].relevance >= pair[1].relevance,
                "{} ({}) before {} ({})",
                pair[0].tag,
                pair[0].relevance,
                pair[1].tag,
                pair[1].relevance
            );
        }
    }

    #[test]
    fn test_sorted_for_every_platform() {
        for platform in Platform::ALL {
            assert_sorted(&generate_hashtags("New blog post", platform.as_str()));
        }
        assert_sorted(&generate_hashtags("New blog post", "myspace"));
    }

    #[test]
    fn test_length_is_base_plus_platform() {
        let result = generate_hashtags("", "instagram");
        assert_eq!(
            result.len(),
            base_table().len() + platform_table(Platform::Instagram).len()
        );
        assert_eq!(result.len(), 18);
    }

    #[test]
    fn test_unknown_platform_gets_base_only() {
        let result = generate_hashtags("anything", "friendster");
        assert_eq!(result.len(), base_table().len());
    }

    #[test]
    fn test_content_does_not_change_result() {
        assert_eq!(
            generate_hashtags("", "tiktok"),
            generate_hashtags("Our new dance challenge is live!", "tiktok")
        );
    }

    #[test]
    fn test_typed_and_string_variants_agree() {
        assert_eq!(
            generate_hashtags_for("", Platform::Linkedin),
            generate_hashtags("", "LinkedIn")
        );
    }

    #[test]
    fn test_platform_tags_are_interleaved() {
        let result = generate_hashtags("", "linkedin");
        assert_eq!(result[0].tag, "socialmedia");
        assert_eq!(result[1].tag, "b2bmarketing");
        assert_eq!(result[2].tag, "digitalmarketing");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let result = generate_hashtags("", "facebook");
        let tied: Vec<&str> = result
            .iter()
            .filter(|c| c.relevance == 88)
            .map(|c| c.tag.as_str())
            .collect();
        assert_eq!(tied, ["marketing", "contentmarketing"]);
    }

    #[test]
    fn test_rank_keeps_duplicates() {
        let make = |tag: &str, relevance| {
            HashtagCandidate::new(tag, 1_000, relevance, Competition::Low).unwrap()
        };
        let ranked = rank(vec![
            make("alpha", 50),
            make("beta", 70),
            make("alpha", 90),
            make("gamma", 70),
        ]);
        let tags: Vec<&str> = ranked.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, ["alpha", "beta", "gamma", "alpha"]);
        assert_eq!(ranked[0].relevance, 90);
    }
}

//! Static hashtag knowledge base.
//!
//! Volumes are rough post-count estimates and relevance scores are fixed per
//! tag. Base and platform tables are kept free of shared tags, but the ranker
//! does not rely on that.

use crate::candidate::{Competition, HashtagCandidate, Popularity};
use crate::platform::Platform;

use Competition::{High, Low, Medium};

/// One row of the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSeed {
    /// Normalized tag text.
    pub tag: &'static str,
    /// Estimated post count.
    pub volume: u64,
    /// Relevance score, 0 to 100.
    pub relevance: u8,
    /// Competition level.
    pub competition: Competition,
    /// Trending flag, if known.
    pub trending: Option<bool>,
}

impl TagSeed {
    const fn new(tag: &'static str, volume: u64, relevance: u8, competition: Competition) -> Self {
        Self {
            tag,
            volume,
            relevance,
            competition,
            trending: None,
        }
    }

    const fn trending(mut self) -> Self {
        self.trending = Some(true);
        self
    }

    /// Materialize the seed as a candidate.
    #[must_use]
    pub fn to_candidate(self) -> HashtagCandidate {
        HashtagCandidate {
            tag: self.tag.to_string(),
            popularity: Popularity::from_volume(self.volume),
            volume: self.volume,
            relevance: self.relevance,
            competition: self.competition,
            trending: self.trending,
        }
    }
}

const BASE: &[TagSeed] = &[
    TagSeed::new("socialmedia", 2_500_000, 95, High).trending(),
    TagSeed::new("digitalmarketing", 850_000, 92, Medium).trending(),
    TagSeed::new("contentstrategy", 38_000, 90, Low),
    TagSeed::new("marketing", 1_800_000, 88, High),
    TagSeed::new("contentmarketing", 510_000, 88, Medium),
    TagSeed::new("contentcreator", 620_000, 85, Medium),
    TagSeed::new("socialmediatips", 95_000, 83, Low).trending(),
    TagSeed::new("branding", 430_000, 80, Medium),
    TagSeed::new("smallbusiness", 1_200_000, 78, High),
    TagSeed::new("growthhacking", 45_000, 76, Low),
    TagSeed::new("entrepreneur", 3_100_000, 72, High),
    TagSeed::new("brandstrategy", 8_500, 70, Low),
    TagSeed::new("communitybuilding", 6_200, 65, Low),
];

const INSTAGRAM: &[TagSeed] = &[
    TagSeed::new("instagood", 5_200_000, 87, High).trending(),
    TagSeed::new("instadaily", 3_400_000, 74, High),
    TagSeed::new("reelsinstagram", 980_000, 91, Medium).trending(),
    TagSeed::new("igers", 1_100_000, 68, High),
    TagSeed::new("explorepage", 2_200_000, 79, High),
];

const TWITTER: &[TagSeed] = &[
    TagSeed::new("twittertips", 25_000, 82, Low),
    TagSeed::new("marketingtwitter", 12_000, 77, Low),
    TagSeed::new("thread", 410_000, 71, Medium).trending(),
    TagSeed::new("buildinpublic", 160_000, 86, Medium).trending(),
];

const LINKEDIN: &[TagSeed] = &[
    TagSeed::new("linkedintips", 48_000, 89, Low),
    TagSeed::new("b2bmarketing", 210_000, 93, Medium),
    TagSeed::new("thoughtleadership", 130_000, 84, Medium),
    TagSeed::new("careergrowth", 75_000, 66, Low),
];

const TIKTOK: &[TagSeed] = &[
    TagSeed::new("fyp", 9_800_000, 81, High).trending(),
    TagSeed::new("tiktokmarketing", 340_000, 94, Medium).trending(),
    TagSeed::new("foryoupage", 7_600_000, 76, High),
    TagSeed::new("learnontiktok", 520_000, 73, Medium),
    TagSeed::new("viral", 6_900_000, 69, High),
];

const FACEBOOK: &[TagSeed] = &[
    TagSeed::new("facebookmarketing", 190_000, 90, Medium),
    TagSeed::new("facebookads", 260_000, 85, Medium),
    TagSeed::new("communitymanager", 52_000, 72, Low),
];

const YOUTUBE: &[TagSeed] = &[
    TagSeed::new("youtubemarketing", 88_000, 88, Low),
    TagSeed::new("youtubeshorts", 4_300_000, 80, High).trending(),
    TagSeed::new("creatoreconomy", 36_000, 75, Low),
];

const PINTEREST: &[TagSeed] = &[
    TagSeed::new("pinterestmarketing", 29_000, 87, Low),
    TagSeed::new("pinterestinspired", 720_000, 64, Medium),
];

/// General marketing tags offered for every platform.
#[must_use]
pub const fn base_table() -> &'static [TagSeed] {
    BASE
}

/// Tags specific to `platform`.
#[must_use]
pub const fn platform_table(platform: Platform) -> &'static [TagSeed] {
    match platform {
        Platform::Instagram => INSTAGRAM,
        Platform::Twitter => TWITTER,
        Platform::Linkedin => LINKEDIN,
        Platform::Tiktok => TIKTOK,
        Platform::Facebook => FACEBOOK,
        Platform::Youtube => YOUTUBE,
        Platform::Pinterest => PINTEREST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::normalize_tag;
    use std::collections::HashSet;

    fn all_seeds() -> impl Iterator<Item = &'static TagSeed> {
        base_table()
            .iter()
            .chain(Platform::ALL.into_iter().flat_map(platform_table))
    }

    #[test]
    fn test_tags_are_normalized() {
        for seed in all_seeds() {
            assert_eq!(normalize_tag(seed.tag).as_deref(), Some(seed.tag));
        }
    }

    #[test]
    fn test_relevance_in_range() {
        assert!(all_seeds().all(|seed| seed.relevance <= 100));
    }

    #[test]
    fn test_every_platform_has_tags() {
        for platform in Platform::ALL {
            assert!(!platform_table(platform).is_empty(), "{platform}");
        }
    }

    #[test]
    fn test_platform_tables_do_not_repeat_base_tags() {
        let base: HashSet<&str> = base_table().iter().map(|s| s.tag).collect();
        for platform in Platform::ALL {
            for seed in platform_table(platform) {
                assert!(!base.contains(seed.tag), "{platform}: {}", seed.tag);
            }
        }
    }

    #[test]
    fn test_seed_to_candidate() {
        let candidate = base_table()[0].to_candidate();
        assert_eq!(candidate.tag, "socialmedia");
        assert_eq!(candidate.popularity, Popularity::High);
        assert_eq!(candidate.trending, Some(true));
    }
}

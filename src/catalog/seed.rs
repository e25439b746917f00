// Seed fixtures
// The fixed catalog contents present at process start. Ids, flags, tags and
// creation timestamps are load-bearing: the mobile client's compatibility
// tests reference them.

use chrono::{DateTime, Utc};

use super::records::{ArHintRecord, GifRecord};

/// Parse a fixed RFC-3339 seed timestamp
///
/// All inputs below are literals known to parse; the epoch fallback keeps
/// the seed path panic-free.
fn seed_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).map_or(DateTime::UNIX_EPOCH, |t| t.with_timezone(&Utc))
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Initial GIF catalog contents
pub fn seed_gifs() -> Vec<GifRecord> {
    vec![
        GifRecord {
            id: "romantic_heart_premium".to_string(),
            name: Some("Premium Heart Animation".to_string()),
            category: Some("romantic".to_string()),
            url: Some("https://media.giphy.com/media/3o7qDEq2bMbcbPRQ2c/giphy.gif".to_string()),
            thumbnail: Some("https://media.giphy.com/media/3o7qDEq2bMbcbPRQ2c/200.gif".to_string()),
            premium: true,
            tags: owned(&["love", "heart", "premium"]),
            created_at: seed_time("2024-01-01T00:00:00Z"),
        },
        GifRecord {
            id: "funny_wink_new".to_string(),
            name: Some("Cute Wink".to_string()),
            category: Some("funny".to_string()),
            url: Some("https://media.giphy.com/media/l0MYt5jPR6QX5pnqM/giphy.gif".to_string()),
            thumbnail: Some("https://media.giphy.com/media/l0MYt5jPR6QX5pnqM/200.gif".to_string()),
            premium: false,
            tags: owned(&["funny", "wink", "cute"]),
            created_at: seed_time("2024-01-15T00:00:00Z"),
        },
        GifRecord {
            id: "romantic_roses".to_string(),
            name: Some("Blooming Roses".to_string()),
            category: Some("romantic".to_string()),
            url: Some("https://media.giphy.com/media/romantic-roses/giphy.gif".to_string()),
            thumbnail: Some("https://media.giphy.com/media/romantic-roses/200.gif".to_string()),
            premium: false,
            tags: owned(&["romantic", "roses", "flowers"]),
            created_at: seed_time("2024-01-10T00:00:00Z"),
        },
        GifRecord {
            id: "premium_diamond_ring".to_string(),
            name: Some("Diamond Ring Sparkle".to_string()),
            category: Some("premium".to_string()),
            url: Some("https://media.giphy.com/media/diamond-ring/giphy.gif".to_string()),
            thumbnail: Some("https://media.giphy.com/media/diamond-ring/200.gif".to_string()),
            premium: true,
            tags: owned(&["premium", "diamond", "proposal"]),
            created_at: seed_time("2024-01-20T00:00:00Z"),
        },
    ]
}

/// Initial AR hint catalog contents
pub fn seed_ar_hints() -> Vec<ArHintRecord> {
    vec![
        ArHintRecord {
            id: "romantic_rose_3d".to_string(),
            title: Some("Romantic 3D Rose".to_string()),
            description: Some("Beautiful floating 3D rose with love message".to_string()),
            category: Some("romantic".to_string()),
            model_url: Some("https://api.loveping.com/models/rose.glb".to_string()),
            thumbnail: Some("https://api.loveping.com/thumbnails/rose.jpg".to_string()),
            premium: false,
            tags: owned(&["love", "rose", "3d"]),
            animation_type: "floating".to_string(),
            created_at: seed_time("2024-01-01T00:00:00Z"),
        },
        ArHintRecord {
            id: "dancing_hearts_ar".to_string(),
            title: Some("Dancing Hearts AR".to_string()),
            description: Some("Multiple hearts dancing around in AR".to_string()),
            category: Some("romantic".to_string()),
            model_url: Some("https://api.loveping.com/models/hearts.glb".to_string()),
            thumbnail: Some("https://api.loveping.com/thumbnails/hearts.jpg".to_string()),
            premium: false,
            tags: owned(&["hearts", "dance", "romantic"]),
            animation_type: "dancing".to_string(),
            created_at: seed_time("2024-01-05T00:00:00Z"),
        },
        ArHintRecord {
            id: "premium_hologram".to_string(),
            title: Some("Holographic Love Message".to_string()),
            description: Some("Premium holographic message with effects".to_string()),
            category: Some("premium".to_string()),
            model_url: Some("https://api.loveping.com/models/hologram.glb".to_string()),
            thumbnail: Some("https://api.loveping.com/thumbnails/hologram.jpg".to_string()),
            premium: true,
            tags: owned(&["premium", "hologram", "luxury"]),
            animation_type: "holographic".to_string(),
            created_at: seed_time("2024-01-25T00:00:00Z"),
        },
        ArHintRecord {
            id: "galaxy_love_premium".to_string(),
            title: Some("Galaxy Love Experience".to_string()),
            description: Some("Cosmic love with stars and galaxies in AR".to_string()),
            category: Some("premium".to_string()),
            model_url: Some("https://api.loveping.com/models/galaxy.glb".to_string()),
            thumbnail: Some("https://api.loveping.com/thumbnails/galaxy.jpg".to_string()),
            premium: true,
            tags: owned(&["premium", "galaxy", "cosmic"]),
            animation_type: "cosmic".to_string(),
            created_at: seed_time("2024-01-30T00:00:00Z"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(seed_gifs().len(), 4);
        assert_eq!(seed_ar_hints().len(), 4);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let gifs = seed_gifs();
        for (i, a) in gifs.iter().enumerate() {
            for b in &gifs[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }

        let hints = seed_ar_hints();
        for (i, a) in hints.iter().enumerate() {
            for b in &hints[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_seed_timestamps_parse() {
        // None of the fixtures should fall back to the epoch
        for gif in seed_gifs() {
            assert_ne!(gif.created_at, DateTime::UNIX_EPOCH);
        }
        for hint in seed_ar_hints() {
            assert_ne!(hint.created_at, DateTime::UNIX_EPOCH);
        }
    }

    #[test]
    fn test_seed_premium_split() {
        let premium_gifs = seed_gifs().iter().filter(|g| g.premium).count();
        assert_eq!(premium_gifs, 2);

        let premium_hints = seed_ar_hints().iter().filter(|h| h.premium).count();
        assert_eq!(premium_hints, 2);
    }
}

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::catalog::VideoCatalog;
use super::playlist::Playlist;

/// Next-item policy: playlist order with an advancing cursor, or uniform
/// random draws (with replacement) from the catalog.
pub enum Selector {
    Ordered {
        items: Vec<String>,
        looped: bool,
        cursor: usize,
    },
    Random {
        items: Vec<String>,
        rng: StdRng,
    },
}

impl Selector {
    pub fn from_playlist(playlist: Playlist) -> Self {
        Self::Ordered {
            items: playlist.videos,
            looped: playlist.looped,
            cursor: 0,
        }
    }

    pub fn random(catalog: VideoCatalog) -> Self {
        Self::random_seeded_from(catalog, StdRng::from_entropy())
    }

    fn random_seeded_from(catalog: VideoCatalog, rng: StdRng) -> Self {
        Self::Random {
            items: catalog.files().to_vec(),
            rng,
        }
    }

    /// The next file name to play, or `None` once a non-looping playlist is
    /// exhausted. Random selection never exhausts.
    pub fn next_video(&mut self) -> Option<String> {
        match self {
            Self::Ordered {
                items,
                looped,
                cursor,
            } => {
                if *cursor >= items.len() {
                    return None;
                }
                let video = items[*cursor].clone();
                *cursor += 1;
                // The cursor only ever wraps; while items remain it stays
                // within [0, len).
                if *cursor >= items.len() && *looped {
                    *cursor = 0;
                }
                Some(video)
            }
            Self::Random { items, rng } => items.choose(rng).cloned(),
        }
    }
}

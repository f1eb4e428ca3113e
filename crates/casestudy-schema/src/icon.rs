//! Icon registry
//!
//! Closed mapping from symbolic names (as stored in `feature.icon`,
//! `header.icon` and `header.badgeIcon`) to glyphs. Unknown names resolve to
//! [`Icon::Fallback`].

use indexmap::IndexMap;
use once_cell::sync::Lazy;

macro_rules! icons {
    ($($variant:ident => ($name:literal, $glyph:literal)),+ $(,)?) => {
        /// Registered icon
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Icon {
            $($variant,)+
            /// Glyph used for names missing from the registry
            Fallback,
        }

        const ENTRIES: &[(&str, Icon)] = &[$(($name, Icon::$variant)),+];

        impl Icon {
            /// Registry key, `""` for the fallback
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                    Self::Fallback => "",
                }
            }

            /// Renderable glyph
            #[must_use]
            pub fn glyph(self) -> &'static str {
                match self {
                    $(Self::$variant => $glyph,)+
                    Self::Fallback => "\u{25CF}",
                }
            }
        }
    };
}

icons! {
    Activity => ("Activity", "\u{1F4C8}"),
    Award => ("Award", "\u{1F3C6}"),
    BarChart => ("BarChart", "\u{1F4CA}"),
    Box => ("Box", "\u{1F4E6}"),
    Calendar => ("Calendar", "\u{1F4C5}"),
    CheckCircle => ("CheckCircle", "\u{2705}"),
    Cloud => ("Cloud", "\u{2601}"),
    Code => ("Code", "\u{1F4BB}"),
    Compass => ("Compass", "\u{1F9ED}"),
    Cpu => ("Cpu", "\u{1F5A5}"),
    Database => ("Database", "\u{1F5C4}"),
    FileText => ("FileText", "\u{1F4C4}"),
    GitBranch => ("GitBranch", "\u{1F33F}"),
    Globe => ("Globe", "\u{1F310}"),
    Heart => ("Heart", "\u{2764}"),
    Image => ("Image", "\u{1F5BC}"),
    Layers => ("Layers", "\u{1F5C2}"),
    Layout => ("Layout", "\u{1F4D0}"),
    Lightbulb => ("Lightbulb", "\u{1F4A1}"),
    Lock => ("Lock", "\u{1F512}"),
    Mail => ("Mail", "\u{2709}"),
    Monitor => ("Monitor", "\u{1F5B5}"),
    Package => ("Package", "\u{1F4E6}"),
    Palette => ("Palette", "\u{1F3A8}"),
    Rocket => ("Rocket", "\u{1F680}"),
    Search => ("Search", "\u{1F50D}"),
    Server => ("Server", "\u{1F5A7}"),
    Settings => ("Settings", "\u{2699}"),
    Shield => ("Shield", "\u{1F6E1}"),
    ShieldCheck => ("ShieldCheck", "\u{1F6E1}"),
    Smartphone => ("Smartphone", "\u{1F4F1}"),
    Sparkles => ("Sparkles", "\u{2728}"),
    Star => ("Star", "\u{2B50}"),
    Target => ("Target", "\u{1F3AF}"),
    Terminal => ("Terminal", "\u{2328}"),
    TrendingUp => ("TrendingUp", "\u{1F4C8}"),
    Users => ("Users", "\u{1F465}"),
    Video => ("Video", "\u{1F3AC}"),
    Wrench => ("Wrench", "\u{1F527}"),
    Zap => ("Zap", "\u{26A1}"),
}

static REGISTRY: Lazy<IndexMap<&'static str, Icon>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

impl Icon {
    /// Exact registry lookup
    #[inline]
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        REGISTRY.get(name).copied()
    }

    /// Registry lookup falling back to [`Icon::Fallback`]
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            if !name.is_empty() {
                tracing::trace!(name, "unknown icon name, using fallback glyph");
            }
            Self::Fallback
        })
    }

    /// Every registered icon in registry order (excludes the fallback)
    pub fn all() -> impl Iterator<Item = Self> {
        REGISTRY.values().copied()
    }

    /// Case-insensitive substring search over registry names
    ///
    /// An empty query matches every icon.
    pub fn search(query: &str) -> impl Iterator<Item = Self> + '_ {
        let needle = query.trim().to_lowercase();
        REGISTRY
            .iter()
            .filter(move |(name, _)| name.to_lowercase().contains(&needle))
            .map(|(_, icon)| *icon)
    }

    #[inline]
    #[must_use]
    pub fn is_fallback(self) -> bool {
        self == Self::Fallback
    }
}

/// Number of registered icons
#[must_use]
pub fn registry_len() -> usize {
    REGISTRY.len()
}

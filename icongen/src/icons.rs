use std::error;
use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

/// A single raster icon to generate.
///
/// Icons are always square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSpec {
    /// The width and height, in pixels.
    pub size: u32,

    /// The output file name.
    pub filename: &'static str,
}

/// A labelled range of an icon table, used for progress output only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Group {
    /// The label used in the progress header.
    pub label: &'static str,

    /// The index of the first entry.
    pub start: usize,

    /// The index after the last entry.
    pub end: usize,
}

/// A complete set of icons required by an icon bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSet {
    /// The iOS application icon set.
    Ios,

    /// The web application manifest icons.
    Web,
}

const fn icon(size: u32, filename: &'static str) -> IconSpec {
    IconSpec { size, filename }
}

/// The iOS icons. Several sizes repeat on purpose, since iPhone and iPad
/// slots are separate files.
const IOS: [IconSpec; 18] = [
    // iPhone
    icon(40, "icon-20@2x.png"),
    icon(60, "icon-20@3x.png"),
    icon(58, "icon-29@2x.png"),
    icon(87, "icon-29@3x.png"),
    icon(80, "icon-40@2x.png"),
    icon(120, "icon-40@3x.png"),
    icon(120, "icon-60@2x.png"),
    icon(180, "icon-60@3x.png"),
    // iPad
    icon(20, "icon-20.png"),
    icon(40, "icon-20@2x-ipad.png"),
    icon(29, "icon-29.png"),
    icon(58, "icon-29@2x-ipad.png"),
    icon(40, "icon-40.png"),
    icon(80, "icon-40@2x-ipad.png"),
    icon(76, "icon-76.png"),
    icon(152, "icon-76@2x.png"),
    icon(167, "icon-83.5@2x.png"),
    // App Store
    icon(1024, "icon-1024.png"),
];

const IOS_GROUPS: [Group; 3] = [
    Group {
        label: "iPhone",
        start: 0,
        end: 8,
    },
    Group {
        label: "iPad",
        start: 8,
        end: 17,
    },
    Group {
        label: "App Store",
        start: 17,
        end: 18,
    },
];

const WEB: [IconSpec; 10] = [
    icon(72, "icon-72.png"),
    icon(96, "icon-96.png"),
    icon(120, "icon-120.png"),
    icon(128, "icon-128.png"),
    icon(144, "icon-144.png"),
    icon(152, "icon-152.png"),
    icon(180, "icon-180.png"),
    icon(192, "icon-192.png"),
    icon(384, "icon-384.png"),
    icon(512, "icon-512.png"),
];

const WEB_GROUPS: [Group; 1] = [Group {
    label: "web",
    start: 0,
    end: 10,
}];

impl IconSet {
    /// All icons of this set, in generation order.
    pub fn specs(&self) -> &'static [IconSpec] {
        use IconSet::*;
        match self {
            Ios => &IOS,
            Web => &WEB,
        }
    }

    /// The progress groups of this set.
    ///
    /// The groups are contiguous and cover every entry of
    /// [`specs`](Self::specs) exactly once.
    pub fn groups(&self) -> &'static [Group] {
        use IconSet::*;
        match self {
            Ios => &IOS_GROUPS,
            Web => &WEB_GROUPS,
        }
    }

    /// The largest icon of this set, suitable for a quick preview.
    pub fn preview(&self) -> &'static IconSpec {
        // Both tables are non-empty
        self.specs()
            .iter()
            .max_by_key(|spec| spec.size)
            .unwrap_or(&self.specs()[0])
    }

    /// The file that must reference the generated icons.
    pub fn manifest(&self) -> &'static str {
        use IconSet::*;
        match self {
            Ios => "Contents.json",
            Web => "manifest.json",
        }
    }
}

impl Group {
    /// The entries of `specs` covered by this group.
    pub fn of<'a>(&self, specs: &'a [IconSpec]) -> &'a [IconSpec] {
        &specs[self.start..self.end]
    }
}

impl Default for IconSet {
    fn default() -> Self {
        IconSet::Ios
    }
}

impl str::FromStr for IconSet {
    type Err = IconSetParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        use IconSet::*;
        match source {
            "ios" => Ok(Ios),
            "web" => Ok(Web),
            s => Err(IconSetParseError(s.into())),
        }
    }
}

impl fmt::Display for IconSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use IconSet::*;
        match self {
            Ios => write!(f, "ios"),
            Web => write!(f, "web"),
        }
    }
}

impl<'a> Deserialize<'a> for IconSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'a>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for IconSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[derive(Debug, PartialEq)]
pub struct IconSetParseError(String);

impl fmt::Display for IconSetParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid icon set: {}", self.0)
    }
}

impl error::Error for IconSetParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ios_table() {
        let specs = IconSet::Ios.specs();
        assert_eq!(specs.len(), 18);
        assert_eq!(specs[0], icon(40, "icon-20@2x.png"));
        assert_eq!(specs[17], icon(1024, "icon-1024.png"));
        assert_eq!(
            specs.iter().filter(|s| s.size == 120).count(),
            2,
        );
    }

    #[test]
    fn valid_entries() {
        for set in [IconSet::Ios, IconSet::Web].iter() {
            let specs = set.specs();
            assert!(specs.iter().all(|s| s.size > 0));
            assert!(specs.iter().all(|s| !s.filename.is_empty()));
            assert_eq!(
                specs.iter().map(|s| s.filename).collect::<HashSet<_>>().len(),
                specs.len(),
            );
        }
    }

    #[test]
    fn groups_cover_table() {
        for set in [IconSet::Ios, IconSet::Web].iter() {
            let mut next = 0;
            for group in set.groups() {
                assert_eq!(group.start, next);
                assert!(group.end > group.start);
                next = group.end;
            }
            assert_eq!(next, set.specs().len());
        }

        let groups = IconSet::Ios.groups();
        assert_eq!(groups[0].of(IconSet::Ios.specs()).len(), 8);
        assert_eq!(groups[1].of(IconSet::Ios.specs()).len(), 9);
        assert_eq!(
            groups[2].of(IconSet::Ios.specs()),
            &[icon(1024, "icon-1024.png")],
        );
    }

    #[test]
    fn preview() {
        assert_eq!(IconSet::Ios.preview().filename, "icon-1024.png");
        assert_eq!(IconSet::Web.preview().filename, "icon-512.png");
    }

    #[test]
    fn from_str() {
        use IconSet::*;
        assert_eq!("ios".parse::<IconSet>().unwrap(), Ios);
        assert_eq!("web".parse::<IconSet>().unwrap(), Web);
        assert_eq!(
            "android".parse::<IconSet>(),
            Err(IconSetParseError("android".into())),
        );
    }

    #[test]
    fn to_str() {
        for source in ["ios", "web"].iter() {
            let a = source.parse::<IconSet>().unwrap();
            assert_eq!(&a.to_string(), source);
        }
    }
}

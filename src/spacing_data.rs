//! Inter-atom spacing tables.
//!
//! TeX inserts glue between adjacent math atoms depending on their classes
//! (TeXbook, chapter 18). The tables below are keyed by the class names of
//! the left and right box; missing entries mean no glue.

use phf::{Map, phf_map};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A length with its unit, as written in the source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurement<T>
where
    T: AsRef<str>,
{
    /// Numeric part
    pub number: f64,
    /// Unit, e.g. `pt`, `em` or `mu`
    pub unit: T,
}

/// Measurement parsed from user input.
pub type MeasurementOwned = Measurement<String>;

/// Measurement from a static table.
pub type MeasurementStatic = Measurement<&'static str>;

/// `\,`
pub const THINSPACE: MeasurementStatic = MeasurementStatic {
    number: 3.0,
    unit: "mu",
};

/// `\:`
pub const MEDIUMSPACE: MeasurementStatic = MeasurementStatic {
    number: 4.0,
    unit: "mu",
};

/// `\;`
pub const THICKSPACE: MeasurementStatic = MeasurementStatic {
    number: 5.0,
    unit: "mu",
};

/// The eight TeX math classes that take part in spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AtomClass {
    /// Ordinary
    #[strum(serialize = "mord")]
    Mord,
    /// Large operator
    #[strum(serialize = "mop")]
    Mop,
    /// Binary operator
    #[strum(serialize = "mbin")]
    Mbin,
    /// Relation
    #[strum(serialize = "mrel")]
    Mrel,
    /// Opening delimiter
    #[strum(serialize = "mopen")]
    Mopen,
    /// Closing delimiter
    #[strum(serialize = "mclose")]
    Mclose,
    /// Punctuation
    #[strum(serialize = "mpunct")]
    Mpunct,
    /// Inner, e.g. a `\left...\right` group
    #[strum(serialize = "minner")]
    Minner,
}

/// Spacing table type: left class, then right class.
pub type Spacings = Map<&'static str, Map<&'static str, MeasurementStatic>>;

/// Spacing in display and text style.
pub const SPACINGS: Spacings = phf_map! {
    "mord" => phf_map! {
        "mop" => THINSPACE,
        "mbin" => MEDIUMSPACE,
        "mrel" => THICKSPACE,
        "minner" => THINSPACE,
    },
    "mop" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
        "mrel" => THICKSPACE,
        "minner" => THINSPACE,
    },
    "mbin" => phf_map! {
        "mord" => MEDIUMSPACE,
        "mop" => MEDIUMSPACE,
        "mopen" => MEDIUMSPACE,
        "minner" => MEDIUMSPACE,
    },
    "mrel" => phf_map! {
        "mord" => THICKSPACE,
        "mop" => THICKSPACE,
        "mopen" => THICKSPACE,
        "minner" => THICKSPACE,
    },
    "mopen" => phf_map!{},
    "mclose" => phf_map! {
        "mop" => THINSPACE,
        "mbin" => MEDIUMSPACE,
        "mrel" => THICKSPACE,
        "minner" => THINSPACE,
    },
    "mpunct" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
        "mrel" => THICKSPACE,
        "mopen" => THINSPACE,
        "mclose" => THINSPACE,
        "mpunct" => THINSPACE,
        "minner" => THINSPACE,
    },
    "minner" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
        "mbin" => MEDIUMSPACE,
        "mrel" => THICKSPACE,
        "mopen" => THINSPACE,
        "mpunct" => THINSPACE,
        "minner" => THINSPACE,
    },
};

/// Spacing in script and scriptscript style.
pub const TIGHT_SPACINGS: Spacings = phf_map! {
    "mord" => phf_map! {
        "mop" => THINSPACE,
    },
    "mop" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
    },
    "mbin" => phf_map!{},
    "mrel" => phf_map!{},
    "mopen" => phf_map!{},
    "mclose" => phf_map! {
        "mop" => THINSPACE,
    },
    "mpunct" => phf_map!{},
    "minner" => phf_map! {
        "mop" => THINSPACE,
    },
};

/// Glue between two classes, if any.
#[must_use]
pub fn spacing_between(
    left: AtomClass,
    right: AtomClass,
    tight: bool,
) -> Option<&'static MeasurementStatic> {
    let table = if tight { &TIGHT_SPACINGS } else { &SPACINGS };
    table.get(left.as_ref())?.get(right.as_ref())
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn every_class_has_a_row() {
        for class in AtomClass::iter() {
            assert!(SPACINGS.contains_key(class.as_ref()), "missing {class}");
            assert!(TIGHT_SPACINGS.contains_key(class.as_ref()), "missing {class}");
        }
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(
            spacing_between(AtomClass::Mord, AtomClass::Mbin, false),
            Some(&MEDIUMSPACE)
        );
        assert_eq!(
            spacing_between(AtomClass::Mrel, AtomClass::Mord, false),
            Some(&THICKSPACE)
        );
        assert_eq!(spacing_between(AtomClass::Mord, AtomClass::Mbin, true), None);
        assert_eq!(
            spacing_between(AtomClass::Mop, AtomClass::Mord, true),
            Some(&THINSPACE)
        );
        assert_eq!(spacing_between(AtomClass::Mopen, AtomClass::Mord, false), None);
    }
}

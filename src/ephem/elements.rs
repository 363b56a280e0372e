//! Mean orbital elements for the major planets.
//!
//! Values are the JPL approximate elements (Standish, "Approximate Positions
//! of the Planets"), valid 1800-2050: each element is a J2000 value plus a
//! linear rate per Julian century. Angles are in degrees, semi-major axes in
//! au.

/// Planets with a Keplerian element set.
///
/// Earth appears as the Earth-Moon barycenter; its heliocentric position is
/// what geocentric vectors are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Planet {
    Mercury,
    Venus,
    EarthMoonBary,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Osculating elements at some epoch, all angles in degrees.
#[derive(Debug, Clone, Copy)]
pub struct OrbitalElements {
    /// Semi-major axis (au).
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination to the ecliptic.
    pub i_deg: f64,
    /// Mean longitude.
    pub l_deg: f64,
    /// Longitude of perihelion.
    pub peri_deg: f64,
    /// Longitude of the ascending node.
    pub node_deg: f64,
}

/// (J2000 value, rate per Julian century) for each of the six elements,
/// in the order a, e, I, L, long.peri, long.node.
type ElementRow = [(f64, f64); 6];

const MERCURY: ElementRow = [
    (0.387_099_27, 0.000_000_37),
    (0.205_635_93, 0.000_019_06),
    (7.004_979_02, -0.005_947_49),
    (252.250_323_50, 149_472.674_111_75),
    (77.457_796_28, 0.160_476_89),
    (48.330_765_93, -0.125_340_81),
];

const VENUS: ElementRow = [
    (0.723_335_66, 0.000_003_90),
    (0.006_776_72, -0.000_041_07),
    (3.394_676_05, -0.000_788_90),
    (181.979_099_50, 58_517.815_387_29),
    (131.602_467_18, 0.002_683_29),
    (76.679_842_55, -0.277_694_18),
];

const EARTH_MOON_BARY: ElementRow = [
    (1.000_002_61, 0.000_005_62),
    (0.016_711_23, -0.000_043_92),
    (-0.000_015_31, -0.012_946_68),
    (100.464_571_66, 35_999.372_449_81),
    (102.937_681_93, 0.323_273_64),
    (0.0, 0.0),
];

const MARS: ElementRow = [
    (1.523_710_34, 0.000_018_47),
    (0.093_394_10, 0.000_078_82),
    (1.849_691_42, -0.008_131_31),
    (-4.553_432_05, 19_140.302_684_99),
    (-23.943_629_59, 0.444_410_88),
    (49.559_538_91, -0.292_573_43),
];

const JUPITER: ElementRow = [
    (5.202_887_00, -0.000_116_07),
    (0.048_386_24, -0.000_132_53),
    (1.304_396_95, -0.001_837_14),
    (34.396_440_51, 3_034.746_127_75),
    (14.728_479_83, 0.212_526_68),
    (100.473_909_09, 0.204_691_06),
];

const SATURN: ElementRow = [
    (9.536_675_94, -0.001_250_60),
    (0.053_861_79, -0.000_509_91),
    (2.485_991_87, 0.001_936_09),
    (49.954_244_23, 1_222.493_622_01),
    (92.598_878_31, -0.418_972_16),
    (113.662_424_48, -0.288_677_94),
];

const URANUS: ElementRow = [
    (19.189_164_64, -0.001_961_76),
    (0.047_257_44, -0.000_043_97),
    (0.772_637_83, -0.002_429_39),
    (313.238_104_51, 428.482_027_85),
    (170.954_276_30, 0.408_052_81),
    (74.016_925_03, 0.042_405_89),
];

const NEPTUNE: ElementRow = [
    (30.069_922_76, 0.000_262_91),
    (0.008_590_48, 0.000_051_05),
    (1.770_043_47, 0.000_353_72),
    (-55.120_029_69, 218.459_453_25),
    (44.964_762_27, -0.322_414_64),
    (131.784_225_74, -0.005_086_64),
];

impl Planet {
    const fn row(self) -> &'static ElementRow {
        match self {
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::EarthMoonBary => &EARTH_MOON_BARY,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
            Planet::Uranus => &URANUS,
            Planet::Neptune => &NEPTUNE,
        }
    }

    /// Elements propagated to `t` Julian centuries since J2000.
    pub fn elements_at(self, t: f64) -> OrbitalElements {
        let row = self.row();
        let el = |i: usize| -> f64 {
            let (value, rate) = row[i];
            value + rate * t
        };
        OrbitalElements {
            a: el(0),
            e: el(1),
            i_deg: el(2),
            l_deg: el(3),
            peri_deg: el(4),
            node_deg: el(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_at_epoch_match_table() {
        let el = Planet::Mercury.elements_at(0.0);
        assert!((el.a - 0.387_099_27).abs() < 1e-12);
        assert!((el.e - 0.205_635_93).abs() < 1e-12);
    }

    #[test]
    fn mean_longitude_advances_with_time() {
        // One century of Mercury covers many revolutions; the propagated mean
        // longitude must move accordingly.
        let l0 = Planet::Mercury.elements_at(0.0).l_deg;
        let l1 = Planet::Mercury.elements_at(1.0).l_deg;
        assert!((l1 - l0 - 149_472.674_111_75).abs() < 1e-6);
    }

    #[test]
    fn eccentricities_stay_elliptical_in_supported_range() {
        // 1800-2050 corresponds to roughly t in [-2, 0.5].
        for planet in [
            Planet::Mercury,
            Planet::Venus,
            Planet::EarthMoonBary,
            Planet::Mars,
            Planet::Jupiter,
            Planet::Saturn,
            Planet::Uranus,
            Planet::Neptune,
        ] {
            for &t in &[-2.0, -1.0, 0.0, 0.5] {
                let e = planet.elements_at(t).e;
                assert!(e > 0.0 && e < 0.25, "{planet:?} at t={t}: e={e}");
            }
        }
    }
}

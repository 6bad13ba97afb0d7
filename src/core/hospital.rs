use crate::domain::model::HospitalInfo;
use crate::utils::error::{IdCodeError, Result};

/// From this birth year on the sequence is a nationwide ordinal with no
/// hospital encoded in it.
pub const CENTRAL_REGISTRY_YEAR: i32 = 2013;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HospitalRange {
    pub lower: u16,
    pub upper: u16,
    pub name: &'static str,
    pub offset: u16,
}

const fn range(lower: u16, upper: u16, name: &'static str, offset: u16) -> HospitalRange {
    HospitalRange {
        lower,
        upper,
        name,
        offset,
    }
}

/// Inclusive, ascending and non-overlapping. Sequence 20 is not assigned.
pub static HOSPITAL_RANGES: [HospitalRange; 15] = [
    range(1, 10, "Kuressaare haigla", 0),
    range(11, 19, "Tartu Ülikooli Naistekliinik", 10),
    range(21, 150, "Ida-Tallinna keskhaigla, Pelgulinna sünnitusmaja (Tallinn)", 20),
    range(151, 160, "Keila haigla", 150),
    range(161, 220, "Rapla haigla, Loksa haigla, Hiiumaa haigla (Kärdla)", 160),
    range(221, 270, "Ida-Viru keskhaigla (Kohtla-Järve, endine Jõhvi)", 220),
    range(271, 370, "Maarjamõisa kliinikum (Tartu), Jõgeva haigla", 270),
    range(371, 420, "Narva haigla", 370),
    range(421, 470, "Pärnu haigla", 420),
    range(471, 490, "Haapsalu haigla", 470),
    range(491, 520, "Järvamaa haigla (Paide)", 490),
    range(521, 570, "Rakvere haigla, Tapa haigla", 520),
    range(571, 600, "Valga haigla", 570),
    range(601, 650, "Viljandi haigla", 600),
    range(651, 700, "Lõuna-Eesti haigla (Võru), Põlva haigla", 650),
];

pub fn find_range(sequence: u16) -> Option<&'static HospitalRange> {
    HOSPITAL_RANGES
        .iter()
        .find(|r| (r.lower..=r.upper).contains(&sequence))
}

pub fn determine_hospital(sequence: u16) -> Result<HospitalInfo> {
    let range = find_range(sequence).ok_or(IdCodeError::InvalidSequenceNumber { sequence })?;
    Ok(HospitalInfo {
        name: Some(range.name.to_string()),
        birth_order: (sequence - range.offset).to_string(),
    })
}

pub fn determine_hospital_or_birth_sequence(sequence: u16, birth_year: i32) -> Result<HospitalInfo> {
    if birth_year < CENTRAL_REGISTRY_YEAR {
        return determine_hospital(sequence);
    }
    Ok(HospitalInfo {
        name: None,
        birth_order: sequence.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_ordered_and_disjoint() {
        for pair in HOSPITAL_RANGES.windows(2) {
            assert!(pair[0].lower <= pair[0].upper);
            assert!(pair[0].upper < pair[1].lower, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
        assert_eq!(HOSPITAL_RANGES[0].lower, 1);
        assert_eq!(HOSPITAL_RANGES[14].upper, 700);
    }

    #[test]
    fn test_every_sequence_but_twenty_resolves_exactly_once() {
        for sequence in 1..=700u16 {
            let hits = HOSPITAL_RANGES
                .iter()
                .filter(|r| (r.lower..=r.upper).contains(&sequence))
                .count();
            let expected = if sequence == 20 { 0 } else { 1 };
            assert_eq!(hits, expected, "sequence {}", sequence);
        }
    }

    #[test]
    fn test_birth_order_subtracts_offset() {
        let info = determine_hospital(29).unwrap();
        assert_eq!(
            info.name.as_deref(),
            Some("Ida-Tallinna keskhaigla, Pelgulinna sünnitusmaja (Tallinn)")
        );
        assert_eq!(info.birth_order, "9");

        let info = determine_hospital(1).unwrap();
        assert_eq!(info.name.as_deref(), Some("Kuressaare haigla"));
        assert_eq!(info.birth_order, "1");

        let info = determine_hospital(700).unwrap();
        assert_eq!(info.name.as_deref(), Some("Lõuna-Eesti haigla (Võru), Põlva haigla"));
        assert_eq!(info.birth_order, "50");
    }

    #[test]
    fn test_unassigned_sequences_fail_before_2013() {
        for sequence in [0u16, 20, 701, 999] {
            let err = determine_hospital_or_birth_sequence(sequence, 2012).unwrap_err();
            assert!(
                matches!(err, IdCodeError::InvalidSequenceNumber { sequence: s } if s == sequence),
                "sequence {}",
                sequence
            );
        }
    }

    #[test]
    fn test_central_registry_sequence_is_verbatim() {
        let info = determine_hospital_or_birth_sequence(42, 2013).unwrap();
        assert_eq!(info.name, None);
        assert_eq!(info.birth_order, "42");

        let info = determine_hospital_or_birth_sequence(999, 2150).unwrap();
        assert_eq!(info.birth_order, "999");
    }
}

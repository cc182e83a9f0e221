//! Validation of free-text replies inside the return flow

use crate::utils::errors::ValidationError;

/// Parse a station id: a positive integer, surrounding whitespace ignored
pub fn parse_station_id(input: &str) -> Result<u64, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidStationId(trimmed.to_string())),
    }
}

/// Accept any non-blank reservation id; its format is checked remotely
pub fn parse_reservation_id(input: &str) -> Result<&str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankReservationId);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_station_id_examples() {
        assert_eq!(parse_station_id("57"), Ok(57));
        assert_eq!(parse_station_id("  57 \n"), Ok(57));
        assert!(parse_station_id("0").is_err());
        assert!(parse_station_id("-3").is_err());
        assert!(parse_station_id("5.7").is_err());
        assert!(parse_station_id("abc").is_err());
        assert!(parse_station_id("").is_err());
    }

    #[test]
    fn test_reservation_id_examples() {
        assert_eq!(parse_reservation_id(" abc-123 "), Ok("abc-123"));
        assert_eq!(parse_reservation_id("   "), Err(ValidationError::BlankReservationId));
    }

    proptest! {
        #[test]
        fn positive_integers_are_accepted(id in 1u64..=u64::MAX) {
            prop_assert_eq!(parse_station_id(&id.to_string()), Ok(id));
        }

        #[test]
        fn non_positive_integers_are_rejected(id in i64::MIN..=0i64) {
            prop_assert!(parse_station_id(&id.to_string()).is_err());
        }

        #[test]
        fn alphabetic_text_is_rejected(text in "[a-zA-Z ]{0,12}") {
            prop_assert!(parse_station_id(&text).is_err());
        }

        #[test]
        fn non_blank_reservation_ids_are_trimmed(id in "[a-f0-9-]{1,36}") {
            let padded = format!("  {}\t", id);
            prop_assert_eq!(parse_reservation_id(&padded), Ok(id.as_str()));
        }
    }
}

use civlog_types::{FieldError, Hours};

/// Tenth-of-hour for each minute band, indexed by the band's first minute.
///
/// 58 and 59 are absent: they roll over into the next whole hour.
const MINUTE_BANDS: [(u32, u64); 11] = [
    (0, 0),
    (4, 1),
    (10, 2),
    (16, 3),
    (22, 4),
    (28, 5),
    (34, 6),
    (40, 7),
    (46, 8),
    (52, 9),
    (58, 10),
];

/// Tenth-of-hour value for a minute count in 0..=59
fn minute_band(minutes: u32) -> u64 {
    MINUTE_BANDS
        .iter()
        .rev()
        .find(|(start, _)| minutes >= *start)
        .map(|(_, tenth)| *tenth)
        .unwrap_or(0)
}

/// Decode a SACI `H:MM` time cell into band-rounded decimal hours.
///
/// A blank cell means no time was logged and decodes to zero. `column` names
/// the source column for the error report.
pub fn decode_time_code(column: &'static str, cell: &str) -> Result<Hours, FieldError> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(Hours::ZERO);
    }

    let malformed = || FieldError::MalformedTime {
        column,
        value: cell.to_string(),
    };

    let (hours, minutes) = cell.split_once(':').ok_or_else(malformed)?;
    if hours.is_empty()
        || minutes.is_empty()
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let hours: u64 = hours.parse().map_err(|_| malformed())?;
    let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
    if minutes > 59 {
        return Err(malformed());
    }

    Hours::checked_from_parts(hours, minute_band(minutes)).ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(cell: &str) -> Hours {
        decode_time_code("day", cell).unwrap()
    }

    #[test]
    fn test_every_band_boundary() {
        let bands: [(u32, u32, u64); 10] = [
            (0, 3, 0),
            (4, 9, 1),
            (10, 15, 2),
            (16, 21, 3),
            (22, 27, 4),
            (28, 33, 5),
            (34, 39, 6),
            (40, 45, 7),
            (46, 51, 8),
            (52, 57, 9),
        ];

        for hours in [0u64, 1, 7, 123] {
            for (low, high, tenth) in bands {
                for minute in low..=high {
                    let cell = format!("{}:{:02}", hours, minute);
                    assert_eq!(
                        decode(&cell),
                        Hours::from_parts(hours, tenth),
                        "cell {}",
                        cell
                    );
                }
            }
        }
    }

    #[test]
    fn test_last_minutes_roll_into_next_hour() {
        assert_eq!(decode("0:58"), Hours::from_parts(1, 0));
        assert_eq!(decode("0:59"), Hours::from_parts(1, 0));
        assert_eq!(decode("9:58"), Hours::from_parts(10, 0));
        assert_eq!(decode("9:59"), Hours::from_parts(10, 0));
    }

    #[test]
    fn test_band_edges_do_not_bleed() {
        assert_eq!(decode("2:03"), Hours::from_parts(2, 0));
        assert_eq!(decode("2:04"), Hours::from_parts(2, 1));
        assert_eq!(decode("2:57"), Hours::from_parts(2, 9));
        assert_eq!(decode("2:58"), Hours::from_parts(3, 0));
    }

    #[test]
    fn test_blank_cell_is_zero() {
        assert_eq!(decode(""), Hours::ZERO);
        assert_eq!(decode("   "), Hours::ZERO);
        assert_eq!(decode(" 1:30 "), Hours::from_parts(1, 5));
    }

    #[test]
    fn test_malformed_cells_are_rejected() {
        for cell in ["1", "1:", ":30", "1:60", "a:10", "1:3x", "-1:10", "1:30:00", "1,5"] {
            let err = decode_time_code("night", cell).unwrap_err();
            assert_eq!(
                err,
                FieldError::MalformedTime {
                    column: "night",
                    value: cell.to_string()
                },
                "cell {}",
                cell
            );
        }
    }

    #[test]
    fn test_huge_hour_count_is_rejected() {
        for cell in ["1844674407370955162:30", "99999999999999999999:00"] {
            assert!(matches!(
                decode_time_code("day", cell),
                Err(FieldError::MalformedTime { column: "day", .. })
            ));
        }
        assert_eq!(
            decode("1844674407370955160:30"),
            Hours::from_tenths(18446744073709551605)
        );
    }
}

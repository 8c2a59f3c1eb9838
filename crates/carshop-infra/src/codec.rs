//! Line codec for vehicle records
//!
//! One record per line, fields in fixed order separated by `", "`:
//! `id, manufacturer, model, price, DD.MM.YYYY, FUEL_TYPE, horsepower`.
//! Text fields are written verbatim; a manufacturer or model containing the
//! separator will not decode back to the same record.

use std::str::FromStr;

use carshop_types::{parse_production_date, FormatError, FuelType, VehicleRecord, DATE_FORMAT};

pub const FIELD_SEPARATOR: &str = ", ";
pub const FIELD_COUNT: usize = 7;

/// Encode a record as one newline-terminated line
pub fn encode(record: &VehicleRecord) -> String {
    format!(
        "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}\n",
        record.id,
        record.manufacturer,
        record.model,
        record.price,
        record.production_date.format(DATE_FORMAT),
        record.fuel_type.as_str(),
        record.horsepower,
        sep = FIELD_SEPARATOR,
    )
}

/// Decode one line back into a record
///
/// A trailing line terminator is ignored.
pub fn decode(line: &str) -> Result<VehicleRecord, FormatError> {
    let line = line.trim_end_matches(&['\n', '\r'][..]);
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(FormatError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    Ok(VehicleRecord {
        id: parse_integer(fields[0], "id")?,
        manufacturer: fields[1].to_string(),
        model: fields[2].to_string(),
        price: parse_integer(fields[3], "price")?,
        production_date: parse_production_date(fields[4])?,
        fuel_type: FuelType::from_str(fields[5])?,
        horsepower: parse_integer(fields[6], "horsepower")?,
    })
}

fn parse_integer<T: FromStr>(s: &str, field: &'static str) -> Result<T, FormatError> {
    s.parse().map_err(|_| FormatError::InvalidInteger {
        field,
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn record() -> VehicleRecord {
        VehicleRecord::new(
            7,
            "Volkswagen",
            "Golf",
            21_500,
            NaiveDate::from_ymd_opt(2019, 11, 4).unwrap(),
            FuelType::Gasoline,
            110,
        )
    }

    #[test]
    fn test_encode_line_layout() {
        assert_eq!(
            encode(&record()),
            "7, Volkswagen, Golf, 21500, 04.11.2019, GASOLINE, 110\n"
        );
    }

    #[test]
    fn test_decode_encoded_line() {
        let original = record();
        assert_eq!(decode(&encode(&original)).unwrap(), original);
    }

    #[test]
    fn test_decode_each_fuel_type() {
        for fuel in FuelType::ALL {
            let mut r = record();
            r.fuel_type = fuel;
            assert_eq!(decode(&encode(&r)).unwrap().fuel_type, fuel);
        }
    }

    #[test]
    fn test_decode_fuel_type_case_insensitive() {
        let r = decode("1, Tesla, Model 3, 40000, 01.02.2022, electric, 283").unwrap();
        assert_eq!(r.fuel_type, FuelType::Electric);
        assert_eq!(r.model, "Model 3");
    }

    #[test]
    fn test_decode_crlf_terminated_line() {
        let r = decode("2, Fiat, Panda, 9000, 15.05.2015, DIESEL, 69\r\n").unwrap();
        assert_eq!(r.horsepower, 69);
    }

    #[test]
    fn test_decode_wrong_field_count() {
        let err = decode("1, Fiat, Panda, 9000, 15.05.2015, DIESEL").unwrap_err();
        assert_eq!(
            err,
            FormatError::FieldCount {
                expected: 7,
                found: 6
            }
        );
    }

    #[test]
    fn test_decode_bad_integers() {
        let err = decode("x, Fiat, Panda, 9000, 15.05.2015, DIESEL, 69").unwrap_err();
        assert!(matches!(err, FormatError::InvalidInteger { field: "id", .. }));

        let err = decode("1, Fiat, Panda, 9k, 15.05.2015, DIESEL, 69").unwrap_err();
        assert!(matches!(err, FormatError::InvalidInteger { field: "price", .. }));

        let err = decode("1, Fiat, Panda, 9000, 15.05.2015, DIESEL, -5").unwrap_err();
        assert!(matches!(err, FormatError::InvalidInteger { field: "horsepower", .. }));
    }

    #[test]
    fn test_decode_bad_dates() {
        for date in ["2015-05-15", "5.5.2015", "31.02.2015", "15.05.15"] {
            let line = format!("1, Fiat, Panda, 9000, {}, DIESEL, 69", date);
            assert_eq!(decode(&line).unwrap_err(), FormatError::InvalidDate(date.to_string()));
        }
    }

    #[test]
    fn test_decode_unknown_fuel_type() {
        let err = decode("1, Fiat, Panda, 9000, 15.05.2015, COAL, 69").unwrap_err();
        assert_eq!(err, FormatError::UnknownFuelType("COAL".to_string()));
    }

    #[test]
    fn test_separator_in_text_field_breaks_decode() {
        let mut r = record();
        r.model = "Golf, GTI".to_string();
        assert!(matches!(decode(&encode(&r)), Err(FormatError::FieldCount { found: 8, .. })));
    }

    fn text_field() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 .-]{0,15}"
    }

    fn production_date() -> impl Strategy<Value = NaiveDate> {
        (0i32..=9999, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn vehicle_record() -> impl Strategy<Value = VehicleRecord> {
        (
            any::<i32>(),
            text_field(),
            text_field(),
            any::<i64>(),
            production_date(),
            proptest::sample::select(FuelType::ALL.to_vec()),
            any::<u32>(),
        )
            .prop_map(|(id, manufacturer, model, price, date, fuel, horsepower)| {
                VehicleRecord::new(id, manufacturer, model, price, date, fuel, horsepower)
            })
    }

    proptest! {
        #[test]
        fn test_decode_inverts_encode(record in vehicle_record()) {
            prop_assert_eq!(decode(&encode(&record)), Ok(record));
        }
    }
}

// src/codec/medicine_codec.rs
//
// Medicine line layout (6 or 7 fields, every field trimmed)
//   medicine_id,name,manufacturer,category,price,quantity[,description]

use super::line::{join_fields, Fields};
use super::{DecodeError, RecordCodec};
use crate::domain::Medicine;

const MIN_FIELDS: usize = 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct MedicineCodec;

impl RecordCodec for MedicineCodec {
    type Record = Medicine;

    fn decode(&self, line: &str) -> Result<Medicine, DecodeError> {
        let fields = Fields::parse_trimmed(line);
        if fields.len() < MIN_FIELDS {
            return Err(DecodeError::FieldCount {
                found: fields.len(),
                expected: "at least 6",
            });
        }

        let medicine_id = fields.required(0, "medicine id")?;
        let name = fields.required(1, "name")?;

        let price: f64 = fields.number(4, "price")?;
        if !price.is_finite() {
            return Err(DecodeError::Invalid(format!("non-finite price {price}")));
        }
        if price < 0.0 {
            return Err(DecodeError::Invalid(format!("negative price {price}")));
        }

        // Parsed signed so a negative count reads as invalid rather than unparsable.
        let quantity: i64 = fields.number(5, "quantity")?;
        let quantity = u32::try_from(quantity)
            .map_err(|_| DecodeError::Invalid(format!("quantity out of range: {quantity}")))?;

        Ok(Medicine::new(medicine_id, name, fields.optional(2), price, quantity)
            .with_category(fields.optional(3))
            .with_description(fields.optional(6)))
    }

    fn encode(&self, medicine: &Medicine) -> String {
        let price = medicine.price.to_string();
        let quantity = medicine.quantity.to_string();
        join_fields([
            medicine.medicine_id.as_str(),
            medicine.name.as_str(),
            medicine.manufacturer.as_str(),
            medicine.category.as_str(),
            price.as_str(),
            quantity.as_str(),
            medicine.description.as_str(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARACETAMOL: &str = "M001,Paracetamol,ABC Pharma,Pain Relief,5.99,100,";

    #[test]
    fn test_decode_inventory_line() {
        let medicine = MedicineCodec.decode(PARACETAMOL).unwrap();
        assert_eq!(medicine.medicine_id, "M001");
        assert_eq!(medicine.name, "Paracetamol");
        assert_eq!(medicine.manufacturer, "ABC Pharma");
        assert_eq!(medicine.category, "Pain Relief");
        assert_eq!(medicine.price, 5.99);
        assert_eq!(medicine.quantity, 100);
        assert_eq!(medicine.description, "");
    }

    #[test]
    fn test_encode_matches_stored_layout() {
        let medicine = MedicineCodec.decode(PARACETAMOL).unwrap();
        assert_eq!(MedicineCodec.encode(&medicine), PARACETAMOL);
    }

    #[test]
    fn test_decode_six_fields_and_null_placeholders() {
        let medicine = MedicineCodec
            .decode(" M002 , Ibuprofen , XYZ Labs , null , 3.5 , 7 ")
            .unwrap();
        assert_eq!(medicine.medicine_id, "M002");
        assert_eq!(medicine.category, "");
        assert_eq!(medicine.quantity, 7);
    }

    #[test]
    fn test_decode_rejects_negative_quantity() {
        assert!(matches!(
            MedicineCodec.decode("M3,Aspirin,Bayer,Pain,1.0,-4,"),
            Err(DecodeError::Invalid(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_finite_price() {
        for price in ["NaN", "inf", "-infinity"] {
            let line = format!("M3,Aspirin,Bayer,Pain,{price},4,");
            assert!(matches!(MedicineCodec.decode(&line), Err(DecodeError::Invalid(_))));
        }
    }

    #[test]
    fn test_decode_rejects_missing_name() {
        assert_eq!(
            MedicineCodec.decode("M3, ,Bayer,Pain,1.0,4,"),
            Err(DecodeError::MissingField("name"))
        );
    }

    #[test]
    fn test_decode_rejects_short_line() {
        assert!(matches!(
            MedicineCodec.decode("M3,Aspirin,Bayer,Pain,1.0"),
            Err(DecodeError::FieldCount { found: 5, .. })
        ));
    }

    #[test]
    fn test_round_trip_keeps_commas_in_description() {
        let medicine = Medicine::new("M010", "Cough Syrup", "Acme, Inc.", 7.25, 12)
            .with_category("Respiratory")
            .with_description("Take 10ml, twice daily");

        let line = MedicineCodec.encode(&medicine);
        assert_eq!(MedicineCodec.decode(&line).unwrap(), medicine);
    }
}

// src/codec/doctor_codec.rs
//
// Doctor line layout
//   short (6):  id,name,age,contact,specialization,availability
//   full (11+): id,name,age,contact,email,address,gender,specialization,
//               qualification,availability,consultation_fee

use super::line::{join_fields, Fields};
use super::{DecodeError, RecordCodec};
use crate::domain::Doctor;

const SHORT_FIELDS: usize = 6;
const FULL_FIELDS: usize = 11;

#[derive(Debug, Clone, Copy, Default)]
pub struct DoctorCodec;

impl RecordCodec for DoctorCodec {
    type Record = Doctor;

    fn decode(&self, line: &str) -> Result<Doctor, DecodeError> {
        let fields = Fields::parse(line);

        match fields.len() {
            SHORT_FIELDS => Ok(Doctor::new(
                fields.required(0, "id")?,
                fields.text(1),
                fields.number(2, "age")?,
                fields.text(3),
                fields.optional(4),
                fields.optional(5),
            )),
            n if n >= FULL_FIELDS => {
                let consultation_fee: f64 = fields.number(10, "consultation fee")?;
                if !consultation_fee.is_finite() {
                    return Err(DecodeError::Invalid(format!(
                        "non-finite consultation fee {consultation_fee}"
                    )));
                }
                if consultation_fee < 0.0 {
                    return Err(DecodeError::Invalid(format!(
                        "negative consultation fee {consultation_fee}"
                    )));
                }

                Ok(Doctor {
                    id: fields.required(0, "id")?,
                    name: fields.text(1).to_string(),
                    age: fields.number(2, "age")?,
                    contact: fields.text(3).to_string(),
                    email: fields.optional(4),
                    address: fields.optional(5),
                    gender: fields.optional(6),
                    specialization: fields.optional(7),
                    qualification: fields.optional(8),
                    availability: fields.optional(9),
                    consultation_fee,
                })
            }
            found => Err(DecodeError::FieldCount {
                found,
                expected: "6 or at least 11",
            }),
        }
    }

    fn encode(&self, doctor: &Doctor) -> String {
        let age = doctor.age.to_string();
        let fee = doctor.consultation_fee.to_string();
        join_fields([
            doctor.id.as_str(),
            doctor.name.as_str(),
            age.as_str(),
            doctor.contact.as_str(),
            doctor.email.as_str(),
            doctor.address.as_str(),
            doctor.gender.as_str(),
            doctor.specialization.as_str(),
            doctor.qualification.as_str(),
            doctor.availability.as_str(),
            fee.as_str(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_short_variant() {
        let doctor = DoctorCodec
            .decode("D001,Dr. Grey,38,5550002222,Surgery,Mon-Wed")
            .unwrap();
        assert_eq!(doctor.specialization, "Surgery");
        assert_eq!(doctor.availability, "Mon-Wed");
        assert_eq!(doctor.consultation_fee, 0.0);
    }

    #[test]
    fn test_decode_full_variant_accepts_java_style_fee() {
        let doctor = DoctorCodec
            .decode("D002,Dr. House,50,5550001111,h@pp.th,Princeton,M,Diagnostics,MD,Mon-Fri,500.0")
            .unwrap();
        assert_eq!(doctor.qualification, "MD");
        assert_eq!(doctor.consultation_fee, 500.0);
    }

    #[test]
    fn test_decode_rejects_negative_fee() {
        assert!(matches!(
            DoctorCodec.decode("D3,Dr. X,40,555,,,,Gen,MD,Any,-5"),
            Err(DecodeError::Invalid(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_finite_fee() {
        assert!(matches!(
            DoctorCodec.decode("D3,Dr. X,40,555,,,,Gen,MD,Any,NaN"),
            Err(DecodeError::Invalid(_))
        ));
        assert!(matches!(
            DoctorCodec.decode("D3,Dr. X,40,555,,,,Gen,MD,Any,inf"),
            Err(DecodeError::Invalid(_))
        ));
    }

    #[test]
    fn test_decode_rejects_seven_fields() {
        assert!(matches!(
            DoctorCodec.decode("D3,Dr. X,40,555,a,b,c"),
            Err(DecodeError::FieldCount { found: 7, .. })
        ));
    }

    #[test]
    fn test_round_trip() {
        let doctor = Doctor::new("D004", "Dr. Strange", 45, "5553334444", "Neurology, peds", "Tue")
            .with_details("s@example.org", "177A Bleecker St", "M")
            .with_practice("MD, PhD", 320.5);

        let line = DoctorCodec.encode(&doctor);
        assert_eq!(DoctorCodec.decode(&line).unwrap(), doctor);
    }
}

//! Implementing `Bindable` by hand with an explicit descriptor table

use envbind::{
    bind, BindError, Bindable, EnvField, FieldDescriptor, FieldType, Kind, Snapshot, Value,
};

#[derive(Debug, Default)]
struct Limits {
    name: String,
    max_bytes: i64,
    ratio: Option<f64>,
    notes: String,
}

impl Bindable for Limits {
    const PREFIX: &'static str = "LIMITS_";

    fn fields() -> &'static [FieldDescriptor] {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::new("name", FieldType::Required(Kind::Str)).tag("NAME"),
            FieldDescriptor::new("max_bytes", FieldType::Required(Kind::Int64)).tag("MAX_BYTES"),
            FieldDescriptor::new("ratio", FieldType::Optional(Kind::Float64)).tag("RATIO"),
            FieldDescriptor::new("notes", FieldType::Required(Kind::Str)).private(),
        ];
        FIELDS
    }

    fn assign(&mut self, index: usize, value: Value) -> Result<(), BindError> {
        match index {
            0 => self.name = EnvField::from_value(value)?,
            1 => self.max_bytes = EnvField::from_value(value)?,
            2 => self.ratio = EnvField::from_value(value)?,
            _ => return Err(BindError::usage(format!("Limits has no bindable field #{index}"))),
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let env = Snapshot::from([
        ("LIMITS_NAME", "uploads"),
        ("LIMITS_MAX_BYTES", "1048576"),
        ("LIMITS_notes", "ignored: private field"),
    ]);

    let mut limits = Limits::default();
    bind(&mut limits, &env)?;
    println!("Limits: {limits:?}");

    // A malformed value reports the literal text and the target type
    let broken = Snapshot::from([("LIMITS_MAX_BYTES", "1MB")]);
    if let Err(err) = bind(&mut Limits::default(), &broken) {
        println!("Error: {err}");
    }

    Ok(())
}

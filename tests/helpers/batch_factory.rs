use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use teiid_batch::LogicalType;
use teiid_batch::engine::types::{Batch, Decimal, Row, ScalarValue, Timestamp};

/// Builds random batches for a fixed column layout.
pub struct BatchFactory {
    types: Vec<LogicalType>,
    rows: usize,
    null_ratio: f64,
    seed: u64,
}

impl BatchFactory {
    pub fn new(types: &[LogicalType]) -> Self {
        Self {
            types: types.to_vec(),
            rows: 10,
            null_ratio: 0.2,
            seed: 7,
        }
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_null_ratio(mut self, ratio: f64) -> Self {
        self.null_ratio = ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn type_names(&self) -> Vec<&'static str> {
        self.types.iter().map(LogicalType::as_str).collect()
    }

    pub fn create(&self) -> Batch {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let rows: Vec<Row> = (0..self.rows)
            .map(|_| {
                self.types
                    .iter()
                    .map(|ty| {
                        if rng.gen_bool(self.null_ratio) {
                            ScalarValue::Null
                        } else {
                            random_value(&mut rng, *ty)
                        }
                    })
                    .collect()
            })
            .collect();
        Batch::new(rows)
    }
}

fn random_string(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..24);
    let wide_from = rng.gen_range(0..=len);
    (0..len)
        .map(|i| {
            if i < wide_from {
                rng.gen_range(' '..='~')
            } else {
                rng.gen_range('\u{80}'..='\u{2FFF}')
            }
        })
        .collect()
}

fn random_value(rng: &mut StdRng, ty: LogicalType) -> ScalarValue {
    match ty {
        LogicalType::String => ScalarValue::String(random_string(rng)),
        LogicalType::Char => ScalarValue::Char(rng.gen_range(0..0xD800)),
        LogicalType::Boolean => ScalarValue::Boolean(rng.r#gen()),
        LogicalType::Byte => ScalarValue::Byte(rng.r#gen()),
        LogicalType::Short => ScalarValue::Short(rng.r#gen()),
        LogicalType::Integer => ScalarValue::Integer(rng.r#gen()),
        LogicalType::Long => ScalarValue::Long(rng.r#gen()),
        LogicalType::BigInteger => {
            let high = BigInt::from(rng.r#gen::<i128>());
            ScalarValue::BigInteger(high * BigInt::from(rng.r#gen::<i64>()))
        }
        LogicalType::Float => ScalarValue::Float(rng.gen_range(-1e6f32..1e6)),
        LogicalType::Double => ScalarValue::Double(rng.gen_range(-1e12..1e12)),
        LogicalType::BigDecimal => ScalarValue::BigDecimal(Decimal::new(
            rng.r#gen::<i64>(),
            rng.gen_range(-5..20),
        )),
        LogicalType::Date => {
            ScalarValue::Date(rng.gen_range(-1_000_000_000_000..4_000_000_000_000))
        }
        LogicalType::Time => ScalarValue::Time(rng.gen_range(0..86_400_000)),
        LogicalType::Timestamp => ScalarValue::Timestamp(Timestamp::new(
            rng.r#gen(),
            rng.gen_range(0..1_000_000_000),
        )),
        LogicalType::Object => ScalarValue::Long(rng.r#gen()),
        LogicalType::Blob => {
            let len = rng.gen_range(0..32);
            ScalarValue::Blob((0..len).map(|_| rng.r#gen()).collect())
        }
        LogicalType::Clob => ScalarValue::Clob(random_string(rng)),
        LogicalType::Xml => ScalarValue::Xml(format!("<v>{}</v>", rng.r#gen::<u32>())),
    }
}

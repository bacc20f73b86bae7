mod helpers;

use helpers::BatchFactory;
use teiid_batch::engine::codec::NullBitmap;
use teiid_batch::{Batch, BatchSerializer, CodecError, CodecLimits, LogicalType, ScalarValue};

#[test]
fn random_batches_roundtrip_for_every_type() {
    let codec = BatchSerializer::default();
    for ty in LogicalType::ALL {
        for rows in [1usize, 7, 8, 9, 63, 64, 65] {
            let factory = BatchFactory::new(&[ty]).with_rows(rows).with_seed(rows as u64);
            let batch = factory.create();
            let names = factory.type_names();

            let bytes = codec.encode(&names, Some(&batch)).unwrap();
            let decoded = codec.decode(&names, &bytes).unwrap();
            assert_eq!(decoded, Some(batch), "{ty} with {rows} rows");
        }
    }
}

#[test]
fn wide_random_batch_roundtrips() {
    let factory = BatchFactory::new(&LogicalType::ALL)
        .with_rows(200)
        .with_null_ratio(0.35)
        .with_seed(42);
    let batch = factory.create();
    let names = factory.type_names();
    let codec = BatchSerializer::default();

    let bytes = codec.encode(&names, Some(&batch)).unwrap();
    assert_eq!(codec.decode(&names, &bytes).unwrap(), Some(batch.clone()));

    let no_types: [&str; 0] = [];
    let generic = codec.encode(&no_types, Some(&batch)).unwrap();
    assert_eq!(codec.decode(&no_types, &generic).unwrap(), Some(batch));
}

#[test]
fn all_null_native_column_is_bitmap_sized() {
    let codec = BatchSerializer::default();
    for rows in [1usize, 7, 8, 9, 63, 64, 65] {
        let batch = Batch::with_nulls(rows, 1);
        let bytes = codec.encode(&["double"], Some(&batch)).unwrap();
        assert_eq!(bytes.len(), 8 + NullBitmap::size_for(rows), "rows = {rows}");
    }
}

#[test]
fn boolean_column_density() {
    let codec = BatchSerializer::default();
    for rows in [1usize, 4, 5, 64, 65] {
        let set = Batch::new(vec![vec![ScalarValue::Boolean(true)]; rows]);
        let bytes = codec.encode(&["boolean"], Some(&set)).unwrap();
        assert_eq!(bytes.len() - 8, (2 * rows).div_ceil(8));

        let unset = Batch::with_nulls(rows, 1);
        let bytes = codec.encode(&["boolean"], Some(&unset)).unwrap();
        assert_eq!(bytes.len() - 8, rows.div_ceil(8));
        assert_eq!(codec.decode(&["boolean"], &bytes).unwrap(), Some(unset));
    }
}

#[test]
fn declared_integer_holding_string_reports_both_types() {
    let batch = Batch::new(vec![vec![ScalarValue::from("forty-two")]]);
    let err = BatchSerializer::default()
        .encode(&["INTEGER"], Some(&batch))
        .unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, CodecError::TypeMismatch { column: 0, .. }));
    assert!(message.contains("INTEGER"), "{message}");
    assert!(message.contains('0'), "{message}");
    assert!(message.contains("String"), "{message}");
}

#[test]
fn reading_with_tight_limits_fails_cleanly() {
    let batch = BatchFactory::new(&[LogicalType::String])
        .with_rows(20)
        .with_null_ratio(0.0)
        .create();
    let bytes = BatchSerializer::default()
        .encode(&["string"], Some(&batch))
        .unwrap();

    let strict = BatchSerializer::new(CodecLimits {
        max_rows: 10,
        ..CodecLimits::default()
    });
    assert!(matches!(
        strict.decode(&["string"], &bytes),
        Err(CodecError::LimitExceeded { .. })
    ));
}

#[test]
fn concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..8u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let factory = BatchFactory::new(&[
                    LogicalType::Integer,
                    LogicalType::String,
                    LogicalType::Boolean,
                    LogicalType::Timestamp,
                ])
                .with_rows(500)
                .with_seed(seed);
                let batch = factory.create();
                let names = factory.type_names();
                let codec = BatchSerializer::default();
                let bytes = codec.encode(&names, Some(&batch)).unwrap();
                codec.decode(&names, &bytes).unwrap() == Some(batch)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn header_claiming_huge_batch_is_rejected_from_a_stream() {
    let types: Vec<String> = vec!["string".to_string(); 2048];
    let mut stream: &[u8] = &[0, 8, 0, 0, 0, 0, 8, 0];

    let err = BatchSerializer::default()
        .read_batch(&mut stream, types.as_slice())
        .unwrap_err();
    assert!(matches!(err, CodecError::LimitExceeded { what: "cell count", .. }));
}

use std::cmp::Ordering;

use uuidx::{text, ParseError, Uuid};

/// Generates known name-based UUIDs through the public entry points
#[test]
fn generates_known_name_based_uuids_through_the_public_entry_points() {
    let ns = Uuid::NAMESPACE_DNS.to_string();
    assert_eq!(ns, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");

    let v3 = uuidx::uuid3(&ns, "php.net").unwrap();
    let v5 = uuidx::uuid5(&ns, "php.net").unwrap();
    assert_eq!(v3.to_string(), "11a38b9a-b3da-360f-9353-a5a725514269");
    assert_eq!(v5.to_string(), "c4a760a8-dbcf-5254-a0d9-6a4474bd1b62");
    assert_eq!(uuidx::uuid3(&ns, "php.net"), Ok(v3));
    assert_eq!(uuidx::uuid5(&ns, "php.net"), Ok(v5));
    assert_eq!(text::version(&v3.to_string()), Ok(3));
    assert_eq!(text::version(&v5.to_string()), Ok(5));
}

/// Decodes reference timestamps
#[test]
fn decodes_reference_timestamps() {
    let cases = [
        ("1EC9414C-232A-6B00-B3C8-9E6BDECED846", "1645557742.0000000"),
        ("017F22E2-79B0-7CC3-98C4-DC0C0C07398F", "1645557742.0000000"),
        ("017F22E2-79B0-8CC3-98C4-DC0C0C07398F", "1645557742.0007977"),
        ("00000000-0000-7000-8000-000000000000", "0.0000000"),
        ("00000000-0000-8000-8000-000000000000", "0.0000000"),
        ("00000000-0000-6000-8000-000000000000", "-12219292800.0000000"),
        ("1b21dd21-3814-6001-8000-000000000000", "0.0000001"),
        ("1b21dd21-3813-6fff-8000-000000000000", "-0.0000001"),
        ("ffffffff-ffff-6fff-bfff-ffffffffffff", "103072857660.6846975"),
        ("ffffffff-ffff-7fff-bfff-ffffffffffff", "281474976710.6550000"),
        ("ffffffff-ffff-8fff-bfff-ffffffffffff", "281474976710.6560000"),
    ];

    for (input, expected) in cases {
        let decoded = text::time(input).unwrap().map(|e| e.to_string());
        assert_eq!(decoded.as_deref(), Some(expected), "{}", input);
    }

    assert_eq!(text::time("2140a926-4a47-465c-b622-4571ad9bb378"), Ok(None));
    assert_eq!(text::time(&Uuid::NIL.to_string()), Ok(None));
    assert_eq!(text::time(&Uuid::MAX.to_string()), Ok(None));
}

/// Orders generated UUIDs by generation order
#[cfg(feature = "global_gen")]
#[test_log::test]
fn orders_generated_uuids_by_generation_order() {
    let generators: [(fn() -> Uuid, u8); 3] =
        [(uuidx::uuid6, 6), (uuidx::uuid7, 7), (uuidx::uuid8, 8)];

    for (generate, version) in generators {
        let mut prev = generate().to_string();
        for _ in 0..1_000 {
            let curr = generate().to_string();
            assert_eq!(text::compare(&curr, &prev), Ok(Ordering::Greater));
            assert!(text::time(&prev).unwrap() < text::time(&curr).unwrap());
            assert_eq!(text::version(&curr), Ok(version));
            prev = curr;
        }
    }

    let e = uuidx::uuid4().to_string();
    assert_eq!(text::version(&e), Ok(4));
    assert_eq!(text::time(&e), Ok(None));
    assert!(matches!(e.as_bytes()[19], b'8' | b'9' | b'a' | b'b'));
}

/// Normalizes all accepted shapes to the same canonical string
#[test]
fn normalizes_all_accepted_shapes_to_the_same_canonical_string() {
    let canonical = "c4a760a8-dbcf-5254-a0d9-6a4474bd1b62";
    let shapes = [
        "c4a760a8-dbcf-5254-a0d9-6a4474bd1b62",
        "C4A760A8-DBCF-5254-A0D9-6A4474BD1B62",
        "{c4a760a8-dbcf-5254-a0d9-6a4474bd1b62}",
        "urn:uuid:c4a760a8-dbcf-5254-a0d9-6a4474bd1b62",
        "URN:UUID:{C4A760A8-DBCF-5254-A0D9-6A4474BD1B62}",
        "uuid:c4a760a8dbcf5254a0d96a4474bd1b62",
    ];

    for e in shapes {
        assert!(text::is_valid(e), "{}", e);
        assert_eq!(text::to_canonical_string(e).as_deref(), Ok(canonical));
        assert_eq!(text::equals(e, canonical), Ok(true));
        assert_eq!(text::compare(e, canonical), Ok(Ordering::Equal));
    }
}

/// Rejects malformed input everywhere but in validity checks
#[test]
fn rejects_malformed_input_everywhere_but_in_validity_checks() {
    let cases = [
        ("c4a760a8-dbcf-5254-a0d9-6a4474bd1b6", ParseError::InvalidLength),
        ("c4a760a8-dbcf-5254-a0d9-6a4474bd1b622", ParseError::InvalidLength),
        ("{c4a760a8-dbcf-5254-a0d9-6a4474bd1b62", ParseError::UnbalancedBraces),
        ("c4a760a8-dbcf-5254-a0d9-6a4474bd1b62}", ParseError::UnbalancedBraces),
        ("g4a760a8-dbcf-5254-a0d9-6a4474bd1b62", ParseError::InvalidCharacter),
    ];

    for (input, err) in cases {
        assert!(!text::is_valid(input), "{}", input);
        assert_eq!(text::to_canonical_string(input), Err(err));
        assert_eq!(text::version(input), Err(err));
        assert_eq!(text::time(input), Err(err));
        assert_eq!(text::equals(input, input), Err(err));
        assert_eq!(text::compare(input, input), Err(err));
        assert_eq!(uuidx::uuid5(input, "php.net"), Err(err));
        assert!(!err.to_string().is_empty());
    }
}

// The crate and its entry function share the name `lyra2`; importing the
// function at the test-crate root would shadow the crate in every path
// below, so the module is imported instead.
use lyra2::derivation::{self, Lyra2Error, Lyra2Params, phs};

fn derive(password: &[u8], salt: &[u8], params: &Lyra2Params, key_len: usize) -> Vec<u8> {
    let mut key = vec![0u8; key_len];
    derivation::lyra2(&mut key, password, salt, params).unwrap();
    key
}

fn small_params() -> Lyra2Params {
    Lyra2Params {
        time_cost: 1,
        n_rows: 16,
        n_cols: 16,
    }
}

#[test]
fn lyra2_is_deterministic() {
    let params = small_params();
    let a = derive(b"password", b"saltsalt", &params, 32);
    let b = derive(b"password", b"saltsalt", &params, 32);
    assert_eq!(a, b);
}

#[test]
fn lyra2_changes_with_every_input() {
    let params = small_params();
    let reference = derive(b"password", b"saltsalt", &params, 32);

    assert_ne!(reference, derive(b"passwore", b"saltsalt", &params, 32));
    assert_ne!(reference, derive(b"password", b"saltsalf", &params, 32));

    let more_time = Lyra2Params {
        time_cost: 2,
        ..small_params()
    };
    assert_ne!(reference, derive(b"password", b"saltsalt", &more_time, 32));

    let more_rows = Lyra2Params {
        n_rows: 32,
        ..small_params()
    };
    assert_ne!(reference, derive(b"password", b"saltsalt", &more_rows, 32));

    let wider_rows = Lyra2Params {
        n_cols: 32,
        ..small_params()
    };
    assert_ne!(reference, derive(b"password", b"saltsalt", &wider_rows, 32));
}

#[test]
fn lyra2_respects_output_length() {
    let params = small_params();
    for key_len in [1usize, 16, 32, 64, 96, 200] {
        let mut key = vec![0xA5u8; key_len + 8];
        derivation::lyra2(&mut key[..key_len], b"password", b"saltsalt", &params).unwrap();
        // bytes past key_len stay untouched
        assert!(key[key_len..].iter().all(|&b| b == 0xA5));
        assert!(key[..key_len].iter().any(|&b| b != 0xA5));
    }
}

/// Flipping a single input bit should flip about half the output bits.
#[test]
fn lyra2_avalanche() {
    let params = small_params();
    let reference = derive(b"password", b"saltsalt", &params, 64);

    for bit in [0usize, 3, 17, 42, 63] {
        let mut password = *b"password";
        password[bit / 8] ^= 1 << (bit % 8);
        let flipped = derive(&password, b"saltsalt", &params, 64);

        let differing: u32 = reference
            .iter()
            .zip(flipped.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();
        // 512 output bits; anything far from ~256 would indicate a
        // diffusion defect
        assert!(
            (160..=352).contains(&differing),
            "bit {bit}: {differing} of 512 bits differ"
        );
    }
}

#[test]
fn lyra2_rejects_oversized_input() {
    let params = Lyra2Params {
        time_cost: 1,
        n_rows: 2,
        n_cols: 2,
    };
    // one row holds 192 bytes
    let password = vec![0u8; 150];
    let salt = vec![0u8; 43];
    let mut key = [0u8; 32];
    let result = derivation::lyra2(&mut key, &password, &salt, &params);
    assert_eq!(result, Err(Lyra2Error::InputTooLarge));
    assert_eq!(key, [0u8; 32]);
}

#[test]
fn lyra2_reports_allocation_failure() {
    // ~1.5 PiB: the size arithmetic is sound on 64-bit targets, so
    // validation passes and the failure comes from the allocator itself
    let params = Lyra2Params {
        time_cost: 1,
        n_rows: u32::MAX,
        n_cols: 4096,
    };
    let mut key = [0u8; 32];
    let result = derivation::lyra2(&mut key, b"password", b"saltsalt", &params);
    assert_eq!(result, Err(Lyra2Error::AllocationFailure));
    assert_eq!(key, [0u8; 32]);
}

#[test]
fn lyra2_rejects_empty_key() {
    let mut key = [0u8; 0];
    assert!(matches!(
        derivation::lyra2(&mut key, b"password", b"saltsalt", &small_params()),
        Err(Lyra2Error::InvalidParams(_))
    ));
}

/// `pwd + salt + basil` hitting an exact block multiple still pads into a
/// reserved extra block rather than omitting it.
#[test]
fn lyra2_block_aligned_input_derives() {
    let params = small_params();
    let password = vec![0x70u8; 40];
    let salt = vec![0x73u8; 32]; // 40 + 32 + 24 == 96, one exact block
    let a = derive(&password, &salt, &params, 32);
    let b = derive(&password, &salt, &params, 32);
    assert_eq!(a, b);

    // one byte more shares the two-block layout but must not collide
    let longer = vec![0x70u8; 41];
    assert_ne!(a, derive(&longer, &salt, &params, 32));
}

#[test]
fn phs_matches_lyra2_at_fixed_columns() {
    let params = Lyra2Params {
        time_cost: 1,
        n_rows: 4,
        n_cols: derivation::N_COLS,
    };
    let expected = derive(b"password", b"salt", &params, 32);

    let mut key = [0u8; 32];
    phs(&mut key, b"password", b"salt", 1, 4).unwrap();
    assert_eq!(key.as_slice(), expected.as_slice());
}

/// Known-answer vector for the documented small configuration
/// (password "password", salt "salt", timeCost 1, 16 rows × 16 columns,
/// 64-byte key), cross-checked against an independent evaluation of the
/// scheme.
#[test]
fn lyra2_known_answer_vector() {
    let key = derive(b"password", b"salt", &small_params(), 64);

    let expected: [u8; 64] = [
        0x44, 0xb6, 0x00, 0x28, 0xbb, 0x5d, 0x54, 0x36, 0x74, 0x3d, 0x6a, 0x05, 0xd6, 0x04, 0xb3,
        0x69, 0x49, 0x0d, 0x1b, 0xd5, 0x60, 0xb3, 0xfa, 0xbe, 0xa8, 0x04, 0xa5, 0x82, 0x59, 0x54,
        0x2c, 0xd2, 0xe2, 0xe2, 0x6f, 0x59, 0x24, 0xdd, 0x5b, 0x7c, 0x02, 0xa5, 0xda, 0x0f, 0x0e,
        0x26, 0x5c, 0x27, 0x0e, 0xc4, 0x6e, 0x33, 0xd9, 0xa7, 0x84, 0xe0, 0x28, 0x91, 0xc6, 0xab,
        0xd0, 0xd7, 0x79, 0xcd,
    ];
    assert_eq!(key.as_slice(), expected.as_slice());
}

/// Known-answer vector for the fixed-column `phs` entry.
#[test]
fn phs_known_answer_vector() {
    let mut key = [0u8; 32];
    phs(&mut key, b"password", b"salt", 1, 4).unwrap();

    let expected: [u8; 32] = [
        0x44, 0x46, 0x8b, 0x43, 0x3f, 0x81, 0x0c, 0xd0, 0x82, 0x18, 0x16, 0x3c, 0x95, 0xa9, 0xd5,
        0x93, 0x65, 0xb2, 0x27, 0x07, 0xe3, 0xfc, 0xf2, 0xfd, 0xd6, 0xd6, 0xb1, 0x0b, 0x4e, 0x13,
        0xfb, 0x57,
    ];
    assert_eq!(key, expected);
}

#[test]
fn lyra2_key_length_is_absorbed() {
    // a 32-byte key is not a prefix of the 64-byte key for the same inputs,
    // because the requested length is part of the basil
    let params = small_params();
    let short = derive(b"password", b"saltsalt", &params, 32);
    let long = derive(b"password", b"saltsalt", &params, 64);
    assert_ne!(short.as_slice(), &long[..32]);
}

#[test]
fn lyra2_empty_password_and_salt_derive() {
    let params = small_params();
    let a = derive(b"", b"", &params, 32);
    let b = derive(b"", b"", &params, 32);
    assert_eq!(a, b);
    assert_ne!(a, derive(b"", b"x", &params, 32));
}

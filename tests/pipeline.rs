use bitvec::prelude::*;
use hamming::config::RunConfig;
use hamming::pipeline::{run, run_random, Injection};
use hamming::report::{write_report, Report};
use hamming::{BlockCode, Error, ErrorPosition, HammingCode};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_seeded_runs_correct_every_code() {
    for parity_bits in 1..=8 {
        let config = RunConfig {
            parity_bits,
            seed: Some(parity_bits as u64),
            ..RunConfig::default()
        };
        let params = config.validate().unwrap();
        let code = HammingCode::from_parameters(params);
        let record = run_random(&code, config.injection, &mut config.rng()).unwrap();

        let injected = record.injected_at.unwrap();
        assert!((1..=params.length()).contains(&injected));
        assert_eq!(record.syndrome.value(), injected);
        assert_eq!(record.error, ErrorPosition::At(injected));
        assert!(record.matches_original);
        assert_eq!(record.decoded_information, record.information);
    }
}

#[test]
fn test_m3_scenario_every_position() {
    let code = HammingCode::new(3).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    for position in 1..=7 {
        let record = run(
            &code,
            bitvec![u8, Lsb0; 1, 0, 1, 1],
            Injection::At(position),
            &mut rng,
        )
        .unwrap();
        assert_eq!(record.syndrome.value(), position);
        assert_eq!(
            code.matrix().find_column(record.syndrome.as_bits()),
            Some(position - 1)
        );
        assert_eq!(record.corrected, record.encoded);
    }
}

#[test]
fn test_block_code_trait_object() {
    let code: Box<dyn BlockCode> = Box::new(HammingCode::new(4).unwrap());
    let params = code.parameters();
    let information = bitvec![u8, Lsb0; 1; params.information_bits()];

    let mut word = code.encode(&information).unwrap();
    word.flip(9).unwrap();
    let syndrome = code.syndrome(&word).unwrap();
    assert_eq!(code.correct(&mut word, &syndrome).unwrap(), ErrorPosition::At(10));
    assert_eq!(word.information_bits(), information);
}

#[test]
fn test_report_file_round() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = RunConfig {
        parity_bits: 4,
        seed: Some(99),
        output: dir.path().join("hamming_result.txt"),
        ..RunConfig::default()
    };
    let code = HammingCode::from_parameters(config.validate().unwrap());
    let record = run_random(&code, config.injection, &mut config.rng()).unwrap();

    write_report(&config.output, &record).unwrap();
    let text = std::fs::read_to_string(&config.output).unwrap();

    assert_eq!(text, Report(&record).to_string());
    assert!(text.starts_with("Generated information vector: ["));
    assert!(text.contains("Parity-check matrix (4x15):\n"));
    assert!(text.contains("P4: [0 0 0 0 0 0 0 1 1 1 1 1 1 1 1]\n"));
    assert!(text.contains(&format!(
        "Error found at position {}\n",
        record.injected_at.unwrap()
    )));
    assert_eq!(text.lines().count(), 1 + 1 + 4 + 1 + 1 + 1 + 2 + 1);

    // a second run replaces the first report
    let record = run_random(&code, Injection::Skip, &mut config.rng()).unwrap();
    write_report(&config.output, &record).unwrap();
    let text = std::fs::read_to_string(&config.output).unwrap();
    assert!(text.contains("No errors detected\n"));
    assert!(!text.contains("Error found"));
}

#[test]
fn test_invalid_parameters_abort_before_building() {
    let config = RunConfig {
        parity_bits: 0,
        ..RunConfig::default()
    };
    assert!(matches!(config.validate(), Err(Error::InvalidParameter(_))));
    assert!(matches!(HammingCode::new(0), Err(Error::InvalidParameter(_))));
}

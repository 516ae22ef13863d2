//! End-to-end sort jobs over the built-in algorithms.

use isort_core::dataset;
use isort_core::{AlgorithmRegistry, Error, Sorter, SorterConfig};

fn is_sorted(values: &[u64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn test_generate_sort_and_write() {
    let temp = tempfile::tempdir().unwrap();
    let data_file = temp.path().join("isort.dat");
    let output_file = temp.path().join("sorted.dat");

    let config = SorterConfig::new()
        .with_algorithm("bubble")
        .with_data_file(&data_file)
        .with_output_file(&output_file)
        .with_generated_data(250, 50)
        .with_seed(7);

    let mut out = Vec::new();
    let values = Sorter::new(config)
        .run(&AlgorithmRegistry::builtin(), &mut out)
        .unwrap();

    assert_eq!(values.len(), 250);
    assert!(is_sorted(&values));
    assert!(values.iter().all(|&v| v < 50));

    // The generated data file keeps the unsorted order
    let mut unsorted = dataset::read_file(&data_file).unwrap();
    assert_eq!(unsorted.len(), 250);
    unsorted.sort_unstable();
    assert_eq!(unsorted, values);

    assert_eq!(dataset::read_file(&output_file).unwrap(), values);

    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "Generating array data of 250 values between 0 and 50\nUsing Algorithm 'bubble'...\n"
    );
}

#[test]
fn test_algorithms_agree_on_same_dataset() {
    let temp = tempfile::tempdir().unwrap();
    let data_file = temp.path().join("isort.dat");
    let registry = AlgorithmRegistry::builtin();

    let generated = SorterConfig::new()
        .with_data_file(&data_file)
        .with_generated_data(1000, u64::MAX)
        .with_seed(99)
        .with_output_file(temp.path().join("radix.dat"));
    let radix = Sorter::new(generated).run(&registry, &mut Vec::new()).unwrap();

    let reuse = SorterConfig::new()
        .with_algorithm("bubble")
        .with_data_file(&data_file)
        .with_output_file(temp.path().join("bubble.dat"));
    let bubble = Sorter::new(reuse).run(&registry, &mut Vec::new()).unwrap();

    assert_eq!(radix, bubble);
    assert_eq!(registry.loaded_names(), vec!["bubble", "radix"]);
}

#[test]
fn test_blank_lines_read_as_zero() {
    let temp = tempfile::tempdir().unwrap();
    let data_file = temp.path().join("isort.dat");
    std::fs::write(&data_file, "100\n\n2\n33\n").unwrap();

    let mut out = Vec::new();
    let values = Sorter::new(SorterConfig::new().with_data_file(&data_file))
        .run(&AlgorithmRegistry::builtin(), &mut out)
        .unwrap();

    assert_eq!(values, vec![0, 2, 33, 100]);
    assert!(String::from_utf8(out).unwrap().ends_with("0\n2\n33\n100\n"));
}

#[test]
fn test_empty_data_file() {
    let temp = tempfile::tempdir().unwrap();
    let data_file = temp.path().join("isort.dat");
    std::fs::write(&data_file, "").unwrap();

    let mut out = Vec::new();
    let values = Sorter::new(SorterConfig::new().with_data_file(&data_file))
        .run(&AlgorithmRegistry::builtin(), &mut out)
        .unwrap();

    assert!(values.is_empty());
    assert_eq!(String::from_utf8(out).unwrap(), "Using Algorithm 'radix'...\n");
}

#[test]
fn test_unknown_algorithm() {
    let temp = tempfile::tempdir().unwrap();
    let data_file = temp.path().join("isort.dat");
    dataset::write_file(&data_file, &[3, 1, 2]).unwrap();

    let config = SorterConfig::new()
        .with_algorithm("quick")
        .with_data_file(&data_file);
    let err = Sorter::new(config)
        .run(&AlgorithmRegistry::builtin(), &mut Vec::new())
        .unwrap_err();

    assert!(matches!(err, Error::ModuleNotFound { .. }));
}

#[test]
fn test_missing_data_file() {
    let temp = tempfile::tempdir().unwrap();
    let config = SorterConfig::new().with_data_file(temp.path().join("missing.dat"));

    let err = Sorter::new(config)
        .run(&AlgorithmRegistry::builtin(), &mut Vec::new())
        .unwrap_err();
    assert!(matches!(err, Error::File { .. }));
}

#[test]
fn test_invalid_data_line() {
    let temp = tempfile::tempdir().unwrap();
    let data_file = temp.path().join("isort.dat");
    std::fs::write(&data_file, "1\n2\nx\n").unwrap();

    let err = Sorter::new(SorterConfig::new().with_data_file(&data_file))
        .run(&AlgorithmRegistry::builtin(), &mut Vec::new())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidValue { line: 3, .. }));
}

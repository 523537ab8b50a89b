use std::fs;

use counter_core::CounterTypeSet;
use counter_engine::{render_types, TypesFileWriter, DEFAULT_TYPES_FILENAME};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn set(names: &[&str]) -> CounterTypeSet {
    names.iter().copied().collect()
}

#[test]
fn render_sorts_case_insensitively_and_ends_with_blank_line() {
    let rendered = render_types(&set(&["Shield", "age", "+1/+1", "loyalty"]));
    assert_eq!(rendered, "+1/+1\nage\nloyalty\nShield\n\n");
}

#[test]
fn render_of_empty_set_is_a_blank_line() {
    assert_eq!(render_types(&CounterTypeSet::new()), "\n");
}

#[test]
fn writer_persists_into_output_dir() {
    let temp = TempDir::new().unwrap();
    let dist = temp.path().join("dist");
    let writer = TypesFileWriter::new(&dist);

    let path = writer.write(&set(&["poison", "age"])).unwrap();

    assert_eq!(path, dist.join(DEFAULT_TYPES_FILENAME));
    assert_eq!(path, writer.target());
    assert_eq!(fs::read_to_string(path).unwrap(), "age\npoison\n\n");
}

#[test]
fn writer_honours_custom_filename() {
    let temp = TempDir::new().unwrap();
    let writer = TypesFileWriter::with_filename(temp.path(), "counters.txt");

    let path = writer.write(&set(&["ice"])).unwrap();

    assert_eq!(path.file_name().unwrap(), "counters.txt");
    assert_eq!(fs::read_to_string(path).unwrap(), "ice\n\n");
}

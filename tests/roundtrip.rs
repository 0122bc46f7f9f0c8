use assert_matches::assert_matches;
use tsvtable::error::TsvTableError;
use tsvtable::record::Record;
use tsvtable::schema::Schema;
use tsvtable::table::Table;

#[test]
fn roundtrip_single_record() {
    let schema = Schema::new(&["name", "age"], &["name"], false).unwrap();
    let mut record = Record::new(schema);

    assert_matches!(record.set("name", "Ann"), Ok(()));
    assert_matches!(record.serialize(), Ok(s) => {
        assert_eq!(s, "Ann\tNA");
    });

    assert_matches!(record.set("age", "5"), Ok(()));
    assert_matches!(record.serialize(), Ok(s) => {
        assert_eq!(s, "Ann\t5");
    });
}

#[test]
fn roundtrip_table() {
    let mut table = Table::new(Schema::new(&["a", "b"], &[], false).unwrap());

    for values in [("1", "2"), ("3", "4")] {
        let mut record = table.new_record();
        assert_matches!(record.update([("a", values.0), ("b", values.1)]), Ok(()));
        assert_matches!(table.add(record), Ok(()));
    }

    assert_eq!(table.header(), "a\tb\n");
    assert_eq!(table.render(), "a\tb\n1\t2\n3\t4");
    assert_eq!(table.len(), 2);
}

#[test]
fn roundtrip_immutable_table() {
    let mut table = Table::new(Schema::new(&["id", "state"], &["id"], true).unwrap());

    let mut record = table.new_record();
    assert_matches!(record.set("id", "7"), Ok(()));
    assert_matches!(
        record.set("id", "8"),
        Err(TsvTableError::ValueConflict { field }) => {
            assert_eq!(field, "id");
        }
    );
    assert_matches!(table.add(record), Ok(()));
    assert_eq!(table.render(), "id\tstate\n7\tNA");
}

#[test]
fn incomplete_record_never_lands_in_table() {
    let mut table = Table::new(Schema::new(&["x"], &["x"], false).unwrap());
    let record = table.new_record();
    assert_matches!(table.add(record), Err(TsvTableError::MissingFields { .. }));
    assert_eq!(table.len(), 0);
    assert_eq!(table.render(), "x\n");
}

#[test]
fn render_then_keep_appending() {
    // no close operation: renders and appends can interleave freely
    let mut table = Table::new(Schema::new(&["v"], &[], false).unwrap());

    let mut record = table.new_record();
    record.set("v", "1").unwrap();
    table.add(record).unwrap();
    assert_eq!(table.render(), "v\n1");

    let mut record = table.new_record();
    record.set("v", "2").unwrap();
    table.add(record).unwrap();
    assert_eq!(table.render(), "v\n1\n2");
}

#[test]
fn write_into_buffer() {
    let mut table = Table::new(Schema::new(&["a"], &[], false).unwrap());
    let mut record = table.new_record();
    record.set("a", "x").unwrap();
    table.add(record).unwrap();

    let mut buf = Vec::new();
    assert_matches!(table.write_into(&mut buf), Ok(3));
    assert_eq!(buf, b"a\nx");
}

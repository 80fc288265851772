// src/store/flat_file_tests.rs
//
// Flat-file store behaviour, exercised through the medicine codec.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::{Arc, Barrier};
    use std::thread;

    use tempfile::TempDir;

    use crate::codec::MedicineCodec;
    use crate::domain::Medicine;
    use crate::error::AppError;
    use crate::store::{EntityStore, FieldValue, FlatFileStore};

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn store_in(dir: &TempDir) -> (FlatFileStore<MedicineCodec>, PathBuf) {
        let path = dir.path().join("medicines.txt");
        let store = FlatFileStore::with_codec(&path, MedicineCodec).unwrap();
        (store, path)
    }

    fn medicine(id: &str, name: &str, quantity: u32) -> Medicine {
        Medicine::new(id, name, "ABC Pharma", 5.0, quantity).with_category("General")
    }

    fn ids(records: &[Medicine]) -> Vec<&str> {
        records.iter().map(|m| m.medicine_id.as_str()).collect()
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    #[test]
    fn test_new_store_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data/medicines.txt");

        let store = FlatFileStore::with_codec(&path, MedicineCodec).unwrap();

        assert!(path.exists());
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_find_by_id() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);
        let aspirin = medicine("M002", "Aspirin", 40).with_description("Take with food, twice daily");

        store.save(&aspirin).unwrap();

        assert_eq!(store.find_by_id("M002").unwrap(), Some(aspirin));
        assert!(store.exists("M002").unwrap());
        assert!(!store.exists("m002").unwrap());
    }

    #[test]
    fn test_find_by_id_is_exact() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);
        store.save(&medicine("M001", "Paracetamol", 10)).unwrap();

        assert!(store.find_by_id(" M001").unwrap().is_none());
        assert!(store.find_by_id("M00").unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);
        for (id, name) in [("A", "Alpha"), ("B", "Beta"), ("C", "Gamma")] {
            store.save(&medicine(id, name, 1)).unwrap();
        }

        let renamed = medicine("B", "Beta Prime", 7);
        store.update(&renamed).unwrap();

        let all = store.find_all().unwrap();
        assert_eq!(ids(&all), vec!["A", "B", "C"]);
        assert_eq!(all[1], renamed);
    }

    #[test]
    fn test_update_missing_id_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        store.save(&medicine("A", "Alpha", 1)).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let result = store.update(&medicine("Z", "Zeta", 1));

        assert!(matches!(result, Err(AppError::NotFound)));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_delete_twice() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);
        store.save(&medicine("A", "Alpha", 1)).unwrap();

        assert_eq!(store.delete("A").unwrap(), 1);
        assert_eq!(store.count().unwrap(), 0);
        assert!(matches!(store.delete("A"), Err(AppError::NotFound)));
    }

    #[test]
    fn test_duplicates_are_stored_and_first_wins() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);
        store.save(&medicine("A", "First", 1)).unwrap();
        store.save(&medicine("A", "Second", 2)).unwrap();

        assert_eq!(store.count().unwrap(), 2);
        assert_eq!(store.find_by_id("A").unwrap().unwrap().name, "First");

        // delete removes every copy
        assert_eq!(store.delete("A").unwrap(), 2);
        assert_eq!(store.count().unwrap(), 0);
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    #[test]
    fn test_find_by_property() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);
        store.save(&medicine("M001", "Paracetamol", 100)).unwrap();
        store.save(&medicine("M002", "Aspirin", 40)).unwrap();

        let by_name = store.find_by_property("NAME", &FieldValue::from("para")).unwrap();
        assert_eq!(ids(&by_name), vec!["M001"]);

        let by_quantity = store.find_by_property("quantity", &FieldValue::from("40")).unwrap();
        assert_eq!(ids(&by_quantity), vec!["M002"]);

        let unknown = store.find_by_property("colour", &FieldValue::from("red")).unwrap();
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_find_by_predicate() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);
        store.save(&medicine("M001", "Paracetamol", 100)).unwrap();
        store.save(&medicine("M002", "Aspirin", 0)).unwrap();

        let empty = store.find_by_predicate(&|m: &Medicine| m.is_out_of_stock()).unwrap();
        assert_eq!(ids(&empty), vec!["M002"]);
    }

    // ========================================================================
    // MALFORMED DATA
    // ========================================================================

    #[test]
    fn test_blank_and_malformed_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        fs::write(
            &path,
            "M001,Paracetamol,ABC Pharma,Pain Relief,5.99,100,\n\n   \nbroken line\nM002,Aspirin,XYZ,Pain Relief,abc,5,\n",
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(ids(&loaded.records), vec!["M001"]);
        assert_eq!(loaded.skipped.len(), 2);
        assert_eq!(loaded.skipped[0].line_number, 4);
        assert_eq!(loaded.skipped[0].line, "broken line");
        assert_eq!(loaded.skipped[1].line_number, 5);

        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_load_strict_reports_first_bad_line() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        fs::write(&path, "M001,Paracetamol,ABC Pharma,Pain Relief,5.99,100,\nbroken line\n").unwrap();

        match store.load_strict() {
            Err(AppError::Decode { line_number, line, .. }) => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "broken line");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_lines_survive_rewrite() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        fs::write(&path, "broken line\nM001,Paracetamol,ABC Pharma,Pain Relief,5.99,100,\n").unwrap();

        store.save(&medicine("M002", "Aspirin", 40)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "broken line");
        assert_eq!(lines[1], "M001,Paracetamol,ABC Pharma,Pain Relief,5.99,100,");
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped_and_kept_verbatim() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        fs::write(
            &path,
            b"M001,Paracetamol,ABC Pharma,Pain Relief,5.99,100,\nM002,Bad\xff\xfe,X,Y,1.0,1,\n",
        )
        .unwrap();

        assert_eq!(ids(&store.find_all().unwrap()), vec!["M001"]);
        assert!(store.find_by_id("M001").unwrap().is_some());
        let loaded = store.load().unwrap();
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].line_number, 2);

        store.save(&medicine("M003", "Ibuprofen", 10)).unwrap();

        let bytes = fs::read(&path).unwrap();
        let lines: Vec<&[u8]> = bytes.split(|b| *b == b'\n').collect();
        assert_eq!(lines[1], &b"M002,Bad\xff\xfe,X,Y,1.0,1,"[..]);
        assert_eq!(ids(&store.find_all().unwrap()), vec!["M001", "M003"]);
    }

    // ========================================================================
    // INSERT
    // ========================================================================

    #[test]
    fn test_insert_rejects_existing_identity() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        store.insert(&medicine("M001", "Paracetamol", 5)).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let result = store.insert(&medicine("M001", "Aspirin", 9));

        assert!(matches!(result, Err(AppError::Duplicate(id)) if id == "M001"));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_concurrent_insert_stores_one_copy() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);
        let store = Arc::new(store);
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    store.insert(&medicine("M001", "Paracetamol", 5)).is_ok()
                })
            })
            .collect();
        let inserted = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(inserted, 1);
        assert_eq!(store.count().unwrap(), 1);
    }

    // ========================================================================
    // MODIFY
    // ========================================================================

    #[test]
    fn test_paracetamol_scenario() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        fs::write(&path, "M001,Paracetamol,ABC Pharma,Pain Relief,5.99,100,\n").unwrap();

        let found = store.find_by_id("M001").unwrap().unwrap();
        assert_eq!(found.name, "Paracetamol");
        assert_eq!(found.price, 5.99);
        assert_eq!(found.quantity, 100);

        let reduced = store
            .modify("M001", &mut |m: &mut Medicine| {
                m.quantity -= 20;
                Ok(())
            })
            .unwrap();
        assert_eq!(reduced.quantity, 80);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "M001,Paracetamol,ABC Pharma,Pain Relief,5.99,80,\n"
        );
    }

    #[test]
    fn test_failed_modify_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        store.save(&medicine("M001", "Paracetamol", 5)).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let result = store.modify("M001", &mut |m: &mut Medicine| {
            m.quantity = 0;
            Err(AppError::Other("refused".to_string()))
        });

        assert!(matches!(result, Err(AppError::Other(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert!(matches!(
            store.modify("NOPE", &mut |_: &mut Medicine| Ok(())),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_concurrent_modify_loses_no_update() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);
        store.save(&medicine("M001", "Paracetamol", 0)).unwrap();
        let store = Arc::new(store);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..5 {
                        store
                            .modify("M001", &mut |m: &mut Medicine| {
                                m.quantity += 1;
                                Ok(())
                            })
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.find_by_id("M001").unwrap().unwrap().quantity, 40);
    }
}

use arraytable::{ArrayStack, StackError, Table, TableConfig, TableError, ValueStack};

#[test]
fn stack_driver_lifo() {
    let mut stack = ArrayStack::new();
    assert!(stack.is_empty());

    stack.push(Box::new(4)).unwrap();
    assert!(!stack.is_empty());

    stack.push(Box::new(10)).unwrap();
    stack.push(Box::new(20)).unwrap();
    assert_eq!(stack.top().map(|v| **v), Some(20));

    stack.push(Box::new(30)).unwrap();
    assert_ne!(stack.top().map(|v| **v), Some(20));

    // Pop the 30 and the 20; the 10 is on top
    stack.pop();
    stack.pop();
    assert_eq!(stack.top().map(|v| **v), Some(10));
    assert_eq!(stack.len(), 2);
}

#[test]
fn stack_driver_push_then_pop_leaves_empty() {
    let mut stack = ArrayStack::new();
    stack.push(Box::new(10)).unwrap();
    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn int_stack_driver() {
    let s: ValueStack<i32> = ValueStack::empty();
    assert!(s.is_empty());

    let s = s.push(5);
    assert!(!s.is_empty());
    assert_eq!(s.top(), Some(5));

    let s = s.push(4);
    assert_eq!(s.top(), Some(4));

    let s = s.pop();
    assert_eq!(s.top(), Some(5));

    let s = s.pop();
    assert!(s.is_empty());
}

#[test]
fn stacks_report_full() {
    let mut boxed = ArrayStack::with_capacity(1).unwrap();
    boxed.push(1).unwrap();
    assert_eq!(boxed.push(2), Err(StackError::Full { capacity: 1 }));

    let value = ValueStack::<i32, 1>::empty().push(1);
    assert_eq!(value.try_push(2), Err(StackError::Full { capacity: 1 }));
    assert_eq!(value.push(2).top(), Some(1));
}

#[test]
fn table_insert_lookup_remove() {
    let mut table = Table::with_config(TableConfig { capacity: 1_000 }, u32::cmp).unwrap();

    for i in 0..1_000u32 {
        assert_eq!(table.insert(i, i.to_string()), Ok(None));
    }
    assert_eq!(
        table.insert(1_000, "overflow".to_string()),
        Err(TableError::Full { capacity: 1_000 })
    );

    for i in 0..1_000u32 {
        assert_eq!(table.lookup(&i), Some(&i.to_string()));
    }

    // Replace every odd key, then remove every even one
    for i in (1..1_000u32).step_by(2) {
        let old = table.insert(i, format!("odd {i}")).unwrap();
        assert_eq!(old, Some(i.to_string()));
    }
    for i in (0..1_000u32).step_by(2) {
        assert_eq!(table.remove(&i), Some(i.to_string()));
        assert_eq!(table.remove(&i), None);
    }

    assert_eq!(table.len(), 500);
    for i in 0..1_000u32 {
        if i % 2 == 0 {
            assert_eq!(table.lookup(&i), None);
        } else {
            assert_eq!(table.lookup(&i), Some(&format!("odd {i}")));
        }
    }
}

#[test]
fn table_with_struct_keys_and_custom_compare() {
    #[derive(Debug, Clone, PartialEq)]
    struct Student {
        id: u32,
        name: &'static str,
    }

    fn by_id(a: &Student, b: &Student) -> std::cmp::Ordering {
        a.id.cmp(&b.id)
    }

    let mut table = Table::with_compare(by_id);
    let ada = Student { id: 1, name: "Ada" };
    let alan = Student { id: 2, name: "Alan" };

    table.insert(ada.clone(), 5u8).unwrap();
    table.insert(alan.clone(), 4u8).unwrap();

    // Same id, different name: still the same key
    let renamed = Student { id: 1, name: "Ada L." };
    assert_eq!(table.insert(renamed.clone(), 3), Ok(Some(5)));
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup(&ada), Some(&3));

    let keys: Vec<&Student> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![&renamed, &alan]);

    let dot = table.render_dot(Some("two students"));
    assert!(dot.contains("Ada L."));
    assert!(dot.contains(r#"description [label="two students"]"#));
}

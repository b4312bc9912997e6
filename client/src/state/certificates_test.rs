use super::*;

fn cert(id: &str, category: &str) -> Certificate {
    Certificate {
        id: id.to_owned(),
        title: format!("Certificate {id}"),
        image: String::new(),
        category: category.to_owned(),
        issuer: None,
        date: None,
    }
}

#[test]
fn grouping_preserves_first_seen_category_order() {
    let certs = vec![
        cert("a", "Marks"),
        cert("b", "Awards"),
        cert("c", "Marks"),
        cert("d", "Courses"),
    ];

    let groups = group_by_category(&certs);

    let categories: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(categories, vec!["Marks", "Awards", "Courses"]);
}

#[test]
fn grouping_preserves_insertion_order_within_a_category() {
    let certs = vec![cert("a", "Marks"), cert("b", "Marks"), cert("c", "Marks")];

    let groups = group_by_category(&certs);

    let ids: Vec<&str> = groups[0].1.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn grouping_an_empty_sequence_yields_no_groups() {
    assert!(group_by_category(&[]).is_empty());
}

#[test]
fn new_certificate_ids_are_distinct() {
    assert_ne!(new_certificate_id(), new_certificate_id());
}

#[test]
fn remove_certificate_drops_only_the_matching_id() {
    let mut certs = vec![cert("a", "Marks"), cert("b", "Marks")];

    assert!(remove_certificate(&mut certs, "a"));
    assert_eq!(certs.len(), 1);
    assert_eq!(certs[0].id, "b");
}

#[test]
fn remove_certificate_with_unknown_id_is_a_no_op() {
    let mut certs = vec![cert("a", "Marks")];
    assert!(!remove_certificate(&mut certs, "z"));
    assert_eq!(certs.len(), 1);
}

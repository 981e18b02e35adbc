use ducet::Collator;
use std::cmp::Ordering;

#[test]
fn capitalization_is_decided_at_the_tertiary_level() {
    let a = "Američane";
    let b = "ameriške";

    let collator = Collator::default_variant().unwrap();
    let comp = collator.compare(a, b);
    assert_eq!(comp, Ordering::Less);
}

#[test]
fn diaeresis_orders_between_unaccented_neighbors() {
    let a = "Hélène";
    let b = "Héloïse";

    let collator = Collator::default_variant().unwrap();
    assert_eq!(collator.compare(a, b), Ordering::Less);
}

use serde_ilcf::{ilcf_map, parse_str, Error, Parser};

#[test]
fn test_sibling_cascade() {
    let map = parse_str("a = 1\n\tb = 2\n\tc = 3\nd = 4").unwrap();
    assert_eq!(
        map,
        ilcf_map! {
            "a" => "1",
            "a_b" => "2",
            "a_c" => "3",
            "d" => "4",
        }
    );
}

#[test]
fn test_trailing_comment_stripped() {
    let map = parse_str("x=1 # comment").unwrap();
    assert_eq!(map, ilcf_map! { "x" => "1" });
}

#[test]
fn test_two_level_jump_rejected() {
    let result = parse_str("x = 1\n\t\ty = 2");
    assert!(matches!(result, Err(Error::Indentation { .. })));
}

#[test]
fn test_absent_key_lookup_fails() {
    let map = parse_str("x = 1").unwrap();
    assert!(map.get("y").unwrap_err().is_not_found());
}

#[test]
fn test_assignment_opens_namespace() {
    let map = parse_str("parent = p\n\tchild = c\n\t\tgrandchild = g").unwrap();
    assert_eq!(map.get("parent").unwrap(), "p");
    assert_eq!(map.get("parent_child").unwrap(), "c");
    assert_eq!(map.get("parent_child_grandchild").unwrap(), "g");
}

#[test]
fn test_most_recent_ancestor_is_used() {
    let text = "a\n\tb\n\t\tx = 1\n\tc\n\t\tx = 2";
    let map = parse_str(text).unwrap();
    assert_eq!(map.get("a_b_x").unwrap(), "1");
    assert_eq!(map.get("a_c_x").unwrap(), "2");
}

#[test]
fn test_dedent_to_any_shallower_depth() {
    let text = "a\n\tb\n\t\tc\n\t\t\td = 1\ne = 2\n\tf = 3";
    let map = parse_str(text).unwrap();
    assert_eq!(map.get("a_b_c_d").unwrap(), "1");
    assert_eq!(map.get("e").unwrap(), "2");
    assert_eq!(map.get("e_f").unwrap(), "3");
}

#[test]
fn test_dedent_drop_count() {
    let mut parser = Parser::new();
    parser
        .process_lines(["a", "\tb", "\t\tc", "\t\t\td"])
        .unwrap();
    assert_eq!(parser.prefixes().len(), 4);

    // Dedenting to depth 1 drops three levels, then the line pushes its own.
    parser.process_line("\te").unwrap();
    assert_eq!(parser.prefixes(), ["a", "e"]);
}

#[test]
fn test_escaped_hash_kept() {
    let map = parse_str("pattern = a\\#b\\#c").unwrap();
    assert_eq!(map.get("pattern").unwrap(), "a#b#c");
}

#[test]
fn test_comment_truncation_trims_value() {
    let map = parse_str("name =   spaced out   # note").unwrap();
    assert_eq!(map.get("name").unwrap(), "spaced out");
}

#[test]
fn test_value_only_comment() {
    let map = parse_str("empty = # nothing here").unwrap();
    assert_eq!(map.get("empty").unwrap(), "");
}

#[test]
fn test_labels_extend_namespace_only() {
    let map = parse_str("outer\n\tinner\n\t\tleaf = 1").unwrap();
    assert_eq!(map, ilcf_map! { "outer_inner_leaf" => "1" });
}

#[test]
fn test_whitespace_lines_do_not_reset_namespace() {
    let map = parse_str("a\n   \n\t\n\tb = 1").unwrap();
    assert_eq!(map, ilcf_map! { "a_b" => "1" });
}

#[test]
fn test_list_markers_store_nothing() {
    let text = "fruits\n\t- apple\n\t- pear\nprices\n\t* apple = 1\n\t*\nafter = 1";
    let map = parse_str(text).unwrap();
    assert_eq!(map, ilcf_map! { "after" => "1" });
}

#[test]
fn test_list_markers_keep_namespace() {
    let map = parse_str("a\n\t- x\n\tb = 1").unwrap();
    assert_eq!(map, ilcf_map! { "a_b" => "1" });
}

#[test]
fn test_reassignment_overwrites() {
    let map = parse_str("a\n\tb = 1\na\n\tb = 2").unwrap();
    assert_eq!(map, ilcf_map! { "a_b" => "2" });
}

#[test]
fn test_unicode_names_and_values() {
    let map = parse_str("größe = 5 # cm\n\tnotiz = ✓").unwrap();
    assert_eq!(map.get("größe").unwrap(), "5");
    assert_eq!(map.get("größe_notiz").unwrap(), "✓");
}

//! Whole-document parsing tests.
//!
//! Trees are compared through `Document::describe`, one node per line.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    ast::{HeaderKind, NodeKind},
    document::Document,
    parsing::{
        ParseOptions,
        blocks::kinds::{Lyric, test_support::scan_first_line},
        snapshot,
    },
};

fn tree(src: &str) -> String {
    let doc = Document::parse(src);
    snapshot::invariants(&doc);
    doc.describe()
}

fn lines(expected: &[&str]) -> String {
    let mut out = expected.join("\n");
    out.push('\n');
    out
}

fn top_level_kinds(src: &str) -> Vec<&'static str> {
    let doc = Document::parse(src);
    doc.children(doc.root())
        .map(|id| doc.node(id).kind.name())
        .collect()
}

#[test]
fn cue_with_plain_direction() {
    let doc = Document::parse("JOHN: Hello there");
    let group = doc.children(doc.root()).next().unwrap();
    let cue = doc.children(group).next().unwrap();

    let NodeKind::Cue(data) = doc.node(cue).kind else {
        panic!("expected a cue");
    };
    assert!(!data.is_dual);
    assert_eq!(doc.text(data.name), "JOHN");
    assert_eq!(doc.node(data.direction).kind, NodeKind::PlainDirection);

    let stream = doc.children(data.direction).next().unwrap();
    let literal = doc.children(stream).next().unwrap();
    assert_eq!(doc.node(literal).kind, NodeKind::Literal);
    assert_eq!(doc.text(literal), "Hello there");
}

#[test]
fn lyric_marker_yields_line_over_its_text() {
    let (arena, found, _) = scan_first_line("~Hello", Lyric::scan);
    let line = found.unwrap();
    assert_eq!(arena[line].kind, NodeKind::Line);
    assert_eq!(&"~Hello"[arena[line].span.start..arena[line].span.end], "Hello");
}

#[test]
fn standalone_lyric_falls_back_to_description() {
    assert_eq!(
        tree("~Hello~"),
        lines(&[
            "Document@0..7",
            "  Description@0..7",
            "    Stream@0..7",
            r#"      Literal@0..7 "~Hello~""#,
        ])
    );
}

#[test]
fn consecutive_facsimile_lines_merge() {
    assert_eq!(
        tree("> Cut to black.\n> Fade in."),
        lines(&[
            "Document@0..26",
            "  Facsimile@0..26",
            "    Line@2..15",
            "      Stream@2..15",
            r#"        Literal@2..15 "Cut to black.""#,
            "    Line@18..26",
            "      Stream@18..26",
            r#"        Literal@18..26 "Fade in.""#,
        ])
    );
}

#[test]
fn interrupted_facsimiles_stay_separate() {
    assert_eq!(
        top_level_kinds("> a\nx\n> b"),
        vec!["Facsimile", "Description", "Facsimile"]
    );
}

#[test]
fn unmatched_trailing_emphasis_is_literal() {
    assert_eq!(
        tree("*bold* and *still bold"),
        lines(&[
            "Document@0..22",
            "  Description@0..22",
            "    Stream@0..22",
            "      Emphasis@0..6",
            r#"        Literal@1..5 "bold""#,
            r#"      Literal@6..22 " and *still bold""#,
        ])
    );
}

#[test]
fn act_header_with_identifier_and_title() {
    let doc = Document::parse("Act 1 - The Beginning");
    let head = doc.children(doc.root()).next().unwrap();
    let NodeKind::Header(data) = doc.node(head).kind else {
        panic!("expected a header");
    };
    assert_eq!(data.kind, HeaderKind::Act);
    assert_eq!(doc.text(data.keyword), "Act");
    assert_eq!(data.identifier.map(|id| doc.text(id)), Some("1"));
    assert_eq!(data.title.map(|id| doc.text(id)), Some("The Beginning"));
}

#[test]
fn dual_cue_without_group_is_description() {
    assert_eq!(
        tree("^JANE: Hi"),
        lines(&[
            "Document@0..9",
            "  Description@0..9",
            "    Stream@0..9",
            r#"      Literal@0..9 "^JANE: Hi""#,
        ])
    );
}

#[test]
fn dual_cue_joins_previous_group() {
    assert_eq!(
        top_level_kinds("JOHN: Hi\n^JANE: Hi\nBOB: Yo\n^AL: Yo\n^ED: Yo"),
        vec!["SimultaneousCues", "SimultaneousCues"]
    );

    let doc = Document::parse("JOHN: Hi\n^JANE: Hi");
    let group = doc.children(doc.root()).next().unwrap();
    assert_eq!(doc.children(group).count(), 2);
    assert_eq!(doc.text(group), "JOHN: Hi\n^JANE: Hi");
}

#[test]
fn dual_cue_after_description_falls_back() {
    assert_eq!(
        top_level_kinds("The lights dim.\n^JANE: Hi"),
        vec!["Description", "Description"]
    );
}

#[test]
fn lyric_direction_absorbs_following_lyric_lines() {
    assert_eq!(
        tree("A: ~ la la\n~ la\n~ (softly) la *la*"),
        lines(&[
            "Document@0..34",
            "  SimultaneousCues@0..34",
            "    Cue@0..34",
            r#"      Name@0..1 "A""#,
            "      LyricDirection@3..34",
            "        Line@5..10",
            "          Stream@5..10",
            r#"            Literal@5..10 "la la""#,
            "        Line@13..15",
            "          Stream@13..15",
            r#"            Literal@13..15 "la""#,
            "        Line@18..34",
            "          Stream@18..34",
            r#"            Literal@18..30 "(softly) la ""#,
            "            Emphasis@30..34",
            r#"              Literal@31..33 "la""#,
        ])
    );
}

#[test]
fn lyric_after_plain_cue_is_description() {
    assert_eq!(
        top_level_kinds("A: hi\n~ la"),
        vec!["SimultaneousCues", "Description"]
    );
}

#[test]
fn parentheticals_only_in_cue_directions() {
    assert_eq!(
        tree("BOB: (sighs) fine"),
        lines(&[
            "Document@0..17",
            "  SimultaneousCues@0..17",
            "    Cue@0..17",
            r#"      Name@0..3 "BOB""#,
            "      PlainDirection@5..17",
            "        Stream@5..17",
            "          Parenthetical@5..12",
            r#"            Literal@6..11 "sighs""#,
            r#"          Literal@12..17 " fine""#,
        ])
    );
    assert_eq!(
        tree("A: ~ la\n~ (softly) la"),
        lines(&[
            "Document@0..21",
            "  SimultaneousCues@0..21",
            "    Cue@0..21",
            r#"      Name@0..1 "A""#,
            "      LyricDirection@3..21",
            "        Line@5..7",
            "          Stream@5..7",
            r#"            Literal@5..7 "la""#,
            "        Line@10..21",
            "          Stream@10..21",
            r#"            Literal@10..21 "(softly) la""#,
        ])
    );
    assert_eq!(
        tree("(sighs) fine"),
        lines(&[
            "Document@0..12",
            "  Description@0..12",
            "    Stream@0..12",
            r#"      Literal@0..12 "(sighs) fine""#,
        ])
    );
}

#[test]
fn comment_runs_to_trimmed_end() {
    assert_eq!(
        tree("Walks // stage note  "),
        lines(&[
            "Document@0..21",
            "  Description@0..21",
            "    Stream@0..19",
            r#"      Literal@0..6 "Walks ""#,
            "      Comment@6..19",
            r#"        Literal@9..19 "stage note""#,
        ])
    );
}

#[test]
fn header_title_gets_inlines() {
    assert_eq!(
        tree(".Coda - The *End*"),
        lines(&[
            "Document@0..17",
            "  Header(Forced)@0..17",
            r#"    Keyword@1..5 "Coda""#,
            "    Title@8..17",
            "      Stream@8..17",
            r#"        Literal@8..12 "The ""#,
            "        Emphasis@12..17",
            r#"          Literal@13..16 "End""#,
        ])
    );
}

#[test]
fn escaped_delimiters_stay_literal() {
    assert_eq!(
        tree(r"\*not\* \[x]"),
        lines(&[
            "Document@0..12",
            "  Description@0..12",
            "    Stream@0..12",
            r#"      Literal@0..12 "\\*not\\* \\[x]""#,
        ])
    );
}

#[test]
fn breaks_and_end_marker() {
    assert_eq!(
        tree("---\nThe End"),
        lines(&[
            "Document@0..11",
            r#"  ThematicBreak@0..3 "---""#,
            r#"  End@4..11 "The End""#,
        ])
    );
}

#[rstest]
#[case("\r\n")]
#[case("\n")]
#[case("\x0c")]
fn line_endings(#[case] newline: &str) {
    let src = format!("A: x{newline}{newline}B: y{newline}");
    assert_eq!(
        top_level_kinds(&src),
        vec!["SimultaneousCues", "SimultaneousCues"]
    );
}

#[test]
fn blank_lines_produce_nothing() {
    let doc = Document::parse("\n  \n\t\n");
    assert_eq!(doc.children(doc.root()).count(), 0);
    assert_eq!(doc.node(doc.root()).span.end, 6);
}

#[test]
fn custom_name_bound() {
    let src = "A VERY LONG SPEAKER NAME INDEED: hello";
    assert_eq!(top_level_kinds(src), vec!["Description"]);

    let options = ParseOptions {
        cue_name_bound: 40,
        ..ParseOptions::default()
    };
    let doc = Document::parse_with(src, &options);
    let first = doc.children(doc.root()).next().unwrap();
    assert_eq!(doc.node(first).kind, NodeKind::SimultaneousCues);
}

#[test]
fn small_arena_grows_without_moving_nodes() {
    let src = "JOHN: *a* [b] c\n".repeat(50);
    let options = ParseOptions {
        initial_capacity: 1,
        ..ParseOptions::default()
    };
    let small = Document::parse_with(src.as_str(), &options);
    let default = Document::parse(src.as_str());
    assert!(small.arena().bucket_count() > default.arena().bucket_count());
    assert_eq!(small.describe(), default.describe());
}

#[test]
fn every_line_lands_somewhere() {
    let src = "Act\n^X: y\n~ z\n> q\n> r\nThe End\n---\n.F\nPage 2 - P\nN: ~ s\n~ t\nplain";
    let doc = Document::parse(src);
    snapshot::invariants(&doc);

    let nonblank = src.lines().filter(|l| !l.trim().is_empty()).count();
    // Two facsimile lines share a block and so do the two lyric lines.
    assert_eq!(doc.children(doc.root()).count(), nonblank - 2);
}

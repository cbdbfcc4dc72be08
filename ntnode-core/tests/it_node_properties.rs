//! Node identity and round-trip properties
//!
//! Exercises the round-trip, bracketing, equality/hash and ordering
//! guarantees over a fixed corpus of IRIs with awkward characters.

use ntnode_core::{
    escape_iri, unescape, BlankNode, Charset, IriNode, LiteralNode, Node, NodeConfig, NoopSink,
    VariableNode,
};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn corpus() -> Vec<&'static str> {
    vec![
        "http://example.org/x",
        "http://example.org/a b",
        "http://example.org/path?q=1&r=2#frag",
        "urn:isbn:0451450523",
        "mailto:someone@example.org",
        "http://example.org/{template}",
        "http://example.org/pipe|caret^tick`",
        "http://example.org/quote\"",
        "http://example.org/back\\slash",
        "http://example.org/literal\\u0020escape",
        "http://example.org/tab\tnewline\n",
        "http://example.org/del\u{7F}",
        "http://例え.テスト/パス",
        "http://example.org/😀",
        "http://example.org/a>b",
        "x",
    ]
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut h = DefaultHasher::new();
    value.hash(&mut h);
    h.finish()
}

#[test]
fn label_inverts_construction() {
    for s in corpus() {
        let node = IriNode::new(s);
        assert_eq!(node.label().unwrap(), s, "round trip of {:?}", s);
    }
}

#[test]
fn label_inverts_construction_ascii() {
    let config = NodeConfig::new().with_charset(Charset::Ascii);
    for s in corpus() {
        let node = IriNode::new_with(s, &config, &mut NoopSink);
        assert!(node.text().is_ascii());
        assert_eq!(node.label().unwrap(), s);
    }
}

#[test]
fn constructed_text_is_bracketed() {
    for s in corpus().into_iter().chain([""]) {
        let node = IriNode::new(s);
        let text = node.text();
        assert!(text.len() >= 2);
        assert!(text.starts_with('<'), "{:?}", text);
        assert!(text.ends_with('>'), "{:?}", text);
        // No raw delimiter survives inside the brackets
        assert!(!text[1..text.len() - 1].contains(['<', '>', ' ']));
    }
}

#[test]
fn text_is_bracketed_escape() {
    for s in corpus() {
        assert_eq!(IriNode::new(s).text(), format!("<{}>", escape_iri(s)));
        assert_eq!(unescape(&escape_iri(s)).unwrap(), s);
    }
}

#[test]
fn ntriples_token_matches_bare_construction() {
    for s in corpus() {
        let built = IriNode::new(s);
        let parsed = IriNode::from_ntriples(built.text());
        assert_eq!(parsed, built);
        assert_eq!(parsed.label().unwrap(), s);
    }
}

#[test]
fn equal_nodes_hash_equal() {
    for a in corpus() {
        for b in corpus() {
            let na = IriNode::new(a);
            let nb = IriNode::new(b);
            if na == nb {
                assert_eq!(hash_of(&na), hash_of(&nb));
                assert_eq!(hash_of(&Node::from(na)), hash_of(&Node::from(nb)));
            }
            assert_eq!(IriNode::new(a) == IriNode::new(b), a == b);
        }
    }
}

#[test]
fn ordering_matches_text_and_is_total() {
    let nodes: Vec<Node> = corpus()
        .into_iter()
        .map(|s| Node::from(IriNode::new(s)))
        .chain([
            Node::from(BlankNode::new("b0")),
            Node::from(LiteralNode::new("v")),
            Node::from(LiteralNode::with_language("v", "en")),
            Node::from(VariableNode::new("s")),
        ])
        .collect();

    for a in &nodes {
        for b in &nodes {
            assert_eq!(a.cmp(b), a.text().cmp(b.text()));
            // Antisymmetry
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
            assert_eq!(a.cmp(b) == Ordering::Equal, a == b);
            for c in &nodes {
                // Transitivity
                if a <= b && b <= c {
                    assert!(a <= c);
                }
            }
        }
    }

    let mut sorted = nodes.clone();
    sorted.sort();
    let mut texts: Vec<&str> = nodes.iter().map(Node::text).collect();
    texts.sort();
    assert_eq!(sorted.iter().map(Node::text).collect::<Vec<_>>(), texts);
}

#[test]
fn empty_input() {
    let node = IriNode::new("");
    assert_eq!(node.text(), "<>");
    assert_eq!(node.label().unwrap(), "");
}

#[test]
fn nodes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IriNode>();
    assert_send_sync::<Node>();

    let node = IriNode::new("http://example.org/shared");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let node = node.clone();
            std::thread::spawn(move || node.label().unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "http://example.org/shared");
    }
}

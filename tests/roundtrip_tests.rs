// tests/roundtrip_tests.rs
//
// parse(generate(q)) must reproduce q for every tree this parser can
// produce, and generation must be idempotent over it.

use jql2::{generate, parse};

const CORPUS: &[&str] = &[
    "SELECT * FROM [nt:base]",
    "select * from [nt:base]",
    "SELECT * FROM [nt:unstructured] AS a WHERE a.[jcr:title] = 'x'",
    "SELECT a.[jcr:title] AS t FROM [nt:file] AS a INNER JOIN [nt:resource] AS b \
     ON ISCHILDNODE(b, a) WHERE a.title LIKE 'foo%'",
    "SELECT * FROM [nt:file] AS a LEFT OUTER JOIN [nt:resource] AS b ON a.ref = b.[jcr:uuid]",
    "SELECT * FROM [nt:file] AS a RIGHT OUTER JOIN [nt:resource] AS b ON ISSAMENODE(a, b)",
    "SELECT * FROM [a] AS a JOIN [b] AS b ON ISSAMENODE(a, b, [/content]) \
     JOIN [c] AS c ON ISDESCENDANTNODE(c, a)",
    "SELECT * FROM [nt:base] WHERE NOT (title IS NOT NULL OR CONTAINS(*, 'hello world'))",
    "SELECT * FROM [nt:base] WHERE ISDESCENDANTNODE([/content/a b])",
    "SELECT * FROM [nt:base] AS a WHERE ISCHILDNODE(a, [/content])",
    "SELECT * FROM [nt:base] WHERE ISSAMENODE([/content/x])",
    "SELECT * FROM [nt:base] ORDER BY LOWER(NAME()) DESC, score DESC",
    "SELECT * FROM [nt:base] ORDER BY x",
    "SELECT * FROM [nt:base] WHERE x = $param",
    "SELECT * FROM [nt:base] WHERE title IS NULL",
    "SELECT * FROM [nt:base] WHERE a.b = 1 AND c = 2 AND d = 3",
    "SELECT * FROM [nt:base] WHERE (x = 1 AND y = 2) OR z = 3",
    "SELECT * FROM [nt:base] WHERE NOT x = 1 AND y = 2",
    "SELECT * FROM [nt:base] WHERE LENGTH(data) > 1024",
    "SELECT * FROM [nt:base] WHERE UPPER(LOCALNAME()) <> 'FOO'",
    "SELECT * FROM [nt:base] WHERE SCORE() >= 0.5",
    "SELECT * FROM [nt:base] WHERE price = CAST('10.50' AS DECIMAL)",
    "SELECT * FROM [nt:base] WHERE created < CAST('2024-01-15T00:00:00.000Z' AS DATE)",
    "SELECT * FROM [nt:base] WHERE x = CAST('3' AS DOUBLE)",
    "SELECT * FROM [nt:base] WHERE active = true",
    "SELECT * FROM [nt:base] WHERE x <= 2.5",
    "SELECT * FROM [nt:base] WHERE x = -7",
    "SELECT a.* FROM [nt:base] AS a",
    "SELECT a.x, b.[jcr:title] AS t FROM [a] AS a JOIN [b] AS b ON a.id = b.id",
    "SELECT * FROM [nt:base] AS a WHERE CONTAINS(a.*, 'term')",
    "SELECT * FROM [nt:base] WHERE CONTAINS([jcr:title], 'term')",
    "SELECT * FROM [nt:base] WHERE x = 'two  spaces inside'",
];

#[test]
fn test_roundtrip_law() {
    for sql2 in CORPUS {
        let parsed = parse(sql2).unwrap_or_else(|e| panic!("parse failed for {}: {}", sql2, e));
        let generated = generate(&parsed)
            .unwrap_or_else(|e| panic!("generate failed for {}: {}", sql2, e));
        let reparsed = parse(&generated)
            .unwrap_or_else(|e| panic!("reparse failed for {}: {}", generated, e));
        assert_eq!(parsed, reparsed, "roundtrip changed the tree for {}", sql2);
    }
}

#[test]
fn test_generation_is_idempotent() {
    for sql2 in CORPUS {
        let once = generate(&parse(sql2).unwrap()).unwrap();
        let twice = generate(&parse(&once).unwrap()).unwrap();
        assert_eq!(once, twice, "generation not idempotent for {}", sql2);
    }
}

#[test]
fn test_canonical_form_is_stable_under_extra_whitespace() {
    let spaced = "SELECT   *   FROM   [nt:base]   WHERE   x   =   1";
    let tight = "SELECT * FROM [nt:base] WHERE x=1";
    assert_eq!(
        generate(&parse(spaced).unwrap()).unwrap(),
        generate(&parse(tight).unwrap()).unwrap()
    );
}

#[test]
fn test_is_null_roundtrip_keeps_the_negated_existence_shape() {
    let parsed = parse("SELECT * FROM [nt:base] WHERE title IS NULL").unwrap();
    let generated = generate(&parsed).unwrap();
    assert_eq!(
        generated,
        "SELECT * FROM [nt:base] WHERE title IS NULL"
    );
    assert_eq!(parse(&generated).unwrap(), parsed);
}

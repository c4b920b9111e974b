//! Index bookkeeping holds for arbitrary line mixes.
//!
//! Sources are built from lines that look like the supported markdown
//! constructs (plus noise), so every block kind and the footer switch are
//! exercised together.

use docpush_babel::common::classify::classify;
use docpush_babel::common::{DocumentAssembler, SimulatedDocument};
use docpush_babel::ir::{text_len, Operation, Range};
use docpush_babel::to_blocks;
use proptest::prelude::*;

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ ]{0,6}(\\* |- |- \\[[ xX]\\] )[a-zA-Z@ é☐]{0,16}",
        "(# |## |### )[a-zA-Z@ ]{0,16}",
        "[a-zA-Z@:. é]{0,24}",
        Just("---".to_string()),
        Just(String::new()),
    ]
}

fn source() -> impl Strategy<Value = String> {
    prop::collection::vec(line(), 0..24).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn assembled_batches_replay(source in source()) {
        let assembly = DocumentAssembler::default().run(&source);
        let mut doc = SimulatedDocument::new();
        prop_assert!(doc.apply_all(&assembly.operations).is_ok());
        prop_assert_eq!(assembly.cursor.index(), 1 + text_len(&doc.text()));
    }

    #[test]
    fn styles_stay_inside_their_insert(source in source()) {
        let ops = DocumentAssembler::default().assemble(&source);
        let mut current: Option<Range> = None;
        for op in &ops {
            match op {
                Operation::InsertText { .. } => current = Some(op.range()),
                _ => {
                    let inserted = current.expect("style before any insert");
                    prop_assert!(
                        inserted.contains(&op.range()),
                        "{} outside {}",
                        op.range(),
                        inserted
                    );
                }
            }
        }
    }

    #[test]
    fn inserts_are_contiguous(source in source()) {
        let ops = DocumentAssembler::default().assemble(&source);
        let mut next = 1;
        for op in ops.iter().filter(|op| op.is_insert()) {
            prop_assert_eq!(op.range().start, next);
            next = op.range().end;
        }
    }

    #[test]
    fn one_insert_per_content_line(source in source()) {
        let ops = DocumentAssembler::default().assemble(&source);
        let content = to_blocks(&source).iter().filter(|b| b.is_content()).count();
        prop_assert_eq!(ops.iter().filter(|op| op.is_insert()).count(), content);
    }

    #[test]
    fn classification_ignores_neighbours(first in line(), second in line()) {
        let blocks = to_blocks(&format!("{first}\n{second}\n"));
        prop_assert_eq!(blocks, vec![classify(&first), classify(&second)]);
    }
}

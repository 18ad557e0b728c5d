//! Benchmark move resolution on a populated board.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use resume_board::{resolve::resolve_move, BoardState, Column, DropTarget, Item, ItemId};
use std::collections::HashMap;

fn populated(per_column: u32) -> (HashMap<ItemId, Item>, BoardState) {
    let columns = vec![
        Column::new("screen", "Screening"),
        Column::new("interview", "Interview"),
        Column::new("offer", "Offer"),
        Column::new("hired", "Hired"),
    ];

    let mut list = Vec::new();
    for column in &columns {
        for n in 1..=per_column {
            list.push(Item::new(
                format!("{}-{}", column.id, n),
                column.id.clone(),
                n,
            ));
        }
    }

    let state = BoardState::build(&columns, &list);
    let items = list.into_iter().map(|i| (i.id.clone(), i)).collect();
    (items, state)
}

fn bench_resolve(c: &mut Criterion) {
    for per_column in [25u32, 250] {
        let base = populated(per_column);

        c.bench_function(&format!("same_column_reorder_{}", per_column), |b| {
            b.iter_batched(
                || base.clone(),
                |(mut items, mut state)| {
                    resolve_move(
                        &mut items,
                        &mut state,
                        &"screen-1".into(),
                        &DropTarget::Item(format!("screen-{}", per_column).into()),
                    )
                },
                BatchSize::SmallInput,
            )
        });

        c.bench_function(&format!("cross_column_move_{}", per_column), |b| {
            b.iter_batched(
                || base.clone(),
                |(mut items, mut state)| {
                    resolve_move(
                        &mut items,
                        &mut state,
                        &"screen-1".into(),
                        &DropTarget::Column("hired".into()),
                    )
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);

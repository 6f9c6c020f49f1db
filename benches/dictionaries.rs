use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 1000;

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(0);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.gen::<u32>();
                let val = rng.gen::<u32>();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut map = BTreeMap::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        map.insert(key, val);
        keys.push(key);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key));
            }
        })
    });
}

macro_rules! dictionary_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use criterion::{black_box, Criterion};
                use rand::rngs::StdRng;
                use rand::{Rng, SeedableRng};
                use tree_dictionaries::$module_name::$type_name;
                use super::NUM_OF_OPERATIONS;

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| {
                        b.iter(|| {
                            let mut rng = StdRng::seed_from_u64(0);
                            let mut map = $type_name::new();
                            for _ in 0..NUM_OF_OPERATIONS {
                                let key = rng.gen::<u32>();
                                let val = rng.gen::<u32>();

                                map.insert(key, val);
                            }
                        })
                    });
                }

                pub fn bench_get(c: &mut Criterion) {
                    let mut rng = StdRng::seed_from_u64(0);
                    let mut map = $type_name::new();
                    let mut keys = Vec::new();
                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen::<u32>();
                        let val = rng.gen::<u32>();

                        map.insert(key, val);
                        keys.push(key);
                    }

                    c.bench_function(&format!("bench {} get", stringify!($module_name)), move |b| {
                        b.iter(|| {
                            for key in &keys {
                                black_box(map.get(key));
                            }
                        })
                    });
                }
            }
        )*
    };
}

dictionary_benches! {
    avl: AvlMap,
    bst: BstMap,
}

criterion_group!(
    benches,
    bench_btreemap_insert,
    bench_btreemap_get,
    avl::bench_insert,
    avl::bench_get,
    bst::bench_insert,
    bst::bench_get,
);
criterion_main!(benches);

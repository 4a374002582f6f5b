use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rematch::{CompileOptions, Control, MatchOptions, Pattern, TextRange};

fn bench_first_match(c: &mut Criterion) {
    let pattern = Pattern::must(r"hello\s+\w+");
    let input = "hello world this is a test hello universe";

    c.bench_function("first_match", |b| {
        b.iter(|| black_box(pattern.first_match(black_box(input))))
    });
}

fn bench_matches(c: &mut Criterion) {
    let pattern = Pattern::must(r"\d+");
    let input = "abc 123 def 456 ghi 789 jkl 012 mno 345 pqr 678 stu 901";

    c.bench_function("matches_numbers", |b| {
        b.iter(|| black_box(pattern.matches(black_box(input))))
    });
}

fn bench_named_groups(c: &mut Criterion) {
    let pattern = Pattern::must(r"(?<first>\w+) (?<last>\w+)");
    let input = "John Appleseed and Jane Doe";

    c.bench_function("named_group_matches", |b| {
        b.iter(|| {
            let found = pattern.matches(black_box(input));
            black_box(found.first().and_then(|m| m.substring_named("last")))
        })
    });
}

fn bench_complex_pattern(c: &mut Criterion) {
    let pattern = Pattern::must(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}");
    let input = "Contact us at test@example.com or admin@company.org";

    c.bench_function("complex_matches", |b| {
        b.iter(|| black_box(pattern.matches(black_box(input))))
    });
}

fn bench_case_insensitive(c: &mut Criterion) {
    let pattern = Pattern::new("hello", CompileOptions::CASE_INSENSITIVE).unwrap();
    let input = "Hello hELLo HELLO heLLo hello";

    c.bench_function("case_insensitive_matches", |b| {
        b.iter(|| black_box(pattern.matches(black_box(input))))
    });
}

fn bench_enumerate_with_stop(c: &mut Criterion) {
    let pattern = Pattern::must(r"\w+");
    let input = "one two three four five six seven eight nine ten";

    c.bench_function("enumerate_stop_after_first", |b| {
        b.iter(|| {
            let mut first = None;
            pattern.enumerate_matches(
                black_box(input),
                None,
                MatchOptions::empty(),
                |result, _flags| {
                    first = result.map(|m| m.range());
                    Control::Stop
                },
            );
            black_box(first)
        })
    });
}

fn bench_sub_range(c: &mut Criterion) {
    let pattern = Pattern::must(r"\d+");
    let input = "abc 123 def 456 ghi 789 jkl 012 mno 345 pqr 678 stu 901";
    let range = Some(TextRange::new(8, 40));

    c.bench_function("matches_in_sub_range", |b| {
        b.iter(|| black_box(pattern.matches_in(black_box(input), range, MatchOptions::empty())))
    });
}

fn bench_replace(c: &mut Criterion) {
    let pattern = Pattern::must(r"(\w+)@(\w+)");
    let input = "a@b c@d e@f g@h i@j k@l";

    c.bench_function("replacing_matches", |b| {
        b.iter(|| {
            black_box(pattern.replacing_matches(
                black_box(input),
                None,
                MatchOptions::empty(),
                r"\2@\1",
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_first_match,
    bench_matches,
    bench_named_groups,
    bench_complex_pattern,
    bench_case_insensitive,
    bench_enumerate_with_stop,
    bench_sub_range,
    bench_replace,
);

criterion_main!(benches);

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mathbox::macros::MacroDefinition;
use mathbox::namespace::Mapping;
use mathbox::{MathContext, Settings, parse, render_to_box};

struct PreparedCase {
    name: &'static str,
    tex: &'static str,
    settings: Arc<Settings>,
}

const CASES: [(&str, &str, bool); 7] = [
    ("Fractions", r"\frac{a+b}{c}\dfrac{1}{2}\binom{n}{k} {x \over y}", false),
    ("Scripts", r"x^{2}_{i,j} \sum_{i=0}^{n} i^2 \int_0^\infty e^{-x^2} dx", true),
    ("SqrtRoot", r"\sqrt{2}\sqrt[3]{x^2+y^2}\sqrt{\frac{a}{b}}", false),
    ("Delimiters", r"\left(\frac{a}{b}\right)\left\{x \middle| y\right\}\Bigl[z\Bigr]", true),
    ("Accents", r"\hat{a}\widehat{xyz}\vec{v}\overline{AB}\overbrace{a+b+c}^{n}", false),
    ("Fonts", r"\mathbb{R}\mathcal{L}\mathbf{v}\text{if }x\textbf{bold}", false),
    ("Errors", r"\frac{1}{ \left( x \notacommand {y", false),
];

fn load_cases() -> Vec<PreparedCase> {
    let mut macros = Mapping::default();
    macros.insert("\\R".to_owned(), MacroDefinition::new("\\mathbb{R}", 0));

    CASES
        .iter()
        .map(|&(name, tex, display_mode)| PreparedCase {
            name,
            tex,
            settings: Arc::new(
                Settings::builder()
                    .display_mode(display_mode)
                    .macros(macros.clone())
                    .build(),
            ),
        })
        .collect()
}

fn bench_rendering(c: &mut Criterion) {
    let ctx = Arc::new(MathContext::default());

    let mut group = c.benchmark_group("mathbox_render");
    for PreparedCase {
        name,
        tex,
        settings,
    } in load_cases()
    {
        let ctx = Arc::clone(&ctx);

        // Ensure the case lays out before measuring it
        render_to_box(ctx.as_ref(), tex, settings.as_ref())
            .expect("layout failed while priming benchmark");

        group.bench_function(name, move |b| {
            b.iter(|| {
                let root = render_to_box(ctx.as_ref(), tex, settings.as_ref())
                    .expect("layout failed during benchmark");
                black_box(root.width);
            });
        });
    }
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let ctx = MathContext::default();
    let settings = Settings::default();

    c.bench_function("mathbox_to_latex", |b| {
        b.iter(|| {
            for (_, tex, _) in CASES {
                let parsed = parse(&ctx, tex, &settings).expect("parse failed during benchmark");
                black_box(parsed.to_latex().len());
            }
        });
    });
}

criterion_group!(benches, bench_rendering, bench_round_trip);
criterion_main!(benches);

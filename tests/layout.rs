mod setup;

use mathbox::build_layout::decompose;
use mathbox::symbols::Mode;
use mathbox::{
    Atom, AtomKind, AtomTree, BoxContent, LayoutBox, LayoutContext, MAX_TREE_DEPTH, Settings,
};
use setup::*;

fn width(source: &str) -> f64 {
    get_built(source, &Settings::default()).unwrap().width
}

/// Clearance below and above the bar of the outermost fraction in `root`:
/// (bar bottom to denominator top, numerator bottom to bar top).
fn bar_gaps(root: &LayoutBox) -> (f64, f64) {
    let fraction = root
        .iter()
        .find(|b| {
            matches!(&b.content, BoxContent::VList { offsets } if offsets.len() == 3)
                && b.children[1].content == BoxContent::Rule
        })
        .expect("no fraction bar");
    let BoxContent::VList { offsets } = &fraction.content else {
        unreachable!()
    };
    let [denom, bar, numer] = fraction.children.as_slice() else {
        unreachable!()
    };
    let bottom = |index: usize, b: &LayoutBox| offsets[index].shift - b.depth;
    let top = |index: usize, b: &LayoutBox| offsets[index].shift + b.height;
    (bottom(1, bar) - top(0, denom), bottom(2, numer) - top(1, bar))
}

#[test]
fn a_layout() {
    it("should build every registered command", || {
        for source in [
            "\\frac{a}{b}\\dfrac12\\binom{n}{k}",
            "\\sqrt{x}\\sqrt[3]{y}",
            "\\hat{a}\\widehat{abc}\\vec{v}",
            "\\overline{x}\\underline{y}\\overbrace{a+b}^{n}\\underbrace{c}_{m}",
            "\\left\\{\\frac{a}{b}\\middle|c\\right\\}",
            "\\bigl(\\Bigr]\\biggm|\\Bigg\\langle",
            "{\\color{red}x}\\colorbox{yellow}{y}\\fcolorbox{red}{blue}{z}",
            "\\Huge X\\scriptstyle y",
            "\\mathcal{L}\\mathbb{R}\\mathtt{t}\\textit{word}",
            "\\operatornamewithlimits{arg\\,max}_x f",
            "\\mathop{lim}\\mathinner{x}",
            "\\rule[1pt]{2em}{0.5em}\\mskip{3mu plus 1fil}",
            "\\clap{x}\\char{955}\\placeholder",
            "\\notacommand^{x}",
        ] {
            expect!(source).to_build(&Settings::default())?;
            expect!(source).to_build(&display_settings())?;
        }
        Ok(())
    });

    it("should lay out the same source the same way twice", || {
        let source = "a+b=\\frac{\\sum_{i}x_i}{n}-\\left(y\\right)";
        expect!(source).to_build_like(source, &Settings::default())
    });

    it("should put spacing around binary operators and relations", || {
        let plain = width("ab");
        let bin = width("a+b") - width("+");
        let rel = width("a=b") - width("=");
        assert!(bin > plain);
        assert!(rel > bin);
        Ok(())
    });

    it("should not space a unary minus", || {
        assert!((width("-x") - width("{-}x")).abs() < 1e-9);
        assert!(width("a-x") > width("-x") + width("a"));
        Ok(())
    });

    it("should shrink scripts", || {
        assert!(width("x^{x}") < 2.0 * width("x"));
        assert!(width("x^{x^{x}}") < 3.0 * width("x"));
        Ok(())
    });

    it("should keep the fraction denominator below the bar", || {
        let frac = get_built("\\frac{1}{2}", &Settings::default())?;
        let one = get_built("1", &Settings::default())?;
        assert!(frac.height > one.height);
        assert!(frac.depth > one.depth);
        Ok(())
    });

    it("should clear the bar by 3 rule widths in display, 1 in text", || {
        let theta = 0.04;
        for denominator in ["2", "\\sqrt{b}", "\\frac{c}{d}", "\\left(x\\right)"] {
            let source = format!("\\frac{{1}}{{{denominator}}}");
            let display = bar_gaps(&get_built(&source, &display_settings())?);
            let text = bar_gaps(&get_built(&source, &Settings::default())?);
            assert!(display.0 >= 3.0 * theta - 1e-9, "{source}: {display:?}");
            assert!(display.1 >= 3.0 * theta - 1e-9, "{source}: {display:?}");
            assert!(text.0 >= theta - 1e-9, "{source}: {text:?}");
            assert!(text.1 >= theta - 1e-9, "{source}: {text:?}");
        }
        // A plain digit sits lower than the clearance needs in display style
        // and exactly at it in text style.
        let display = bar_gaps(&get_built("\\frac{1}{2}", &display_settings())?);
        let text = bar_gaps(&get_built("\\frac{1}{2}", &Settings::default())?);
        assert!((text.0 - theta).abs() < 1e-9, "{text:?}");
        assert!(display.0 > text.0);
        Ok(())
    });

    it("should set large operators bigger in display style", || {
        let inline = get_built("\\sum", &Settings::default())?;
        let display = get_built("\\sum", &display_settings())?;
        assert!(display.total_height() > inline.total_height());
        Ok(())
    });

    it("should grow \\left and \\right with their content", || {
        let small = get_built("\\left(x\\right)", &Settings::default())?;
        let tall = get_built("\\left(\\frac{\\frac{a}{b}}{\\frac{c}{d}}\\right)", &Settings::default())?;
        assert!(tall.total_height() > small.total_height());
        Ok(())
    });

    it("should draw error atoms in the error color", || {
        let root = get_built("x+\\notacommand", &Settings::default())?;
        assert!(root.has_error());
        let marker = root
            .iter()
            .find(|b| b.style.color.as_deref() == Some("#cc0000"));
        assert!(marker.is_some());
        Ok(())
    });

    it("should lay out nesting up to the depth limit", || {
        let depth = Settings::default().max_depth - 1;
        let braces = format!("{}x{}", "{".repeat(depth), "}".repeat(depth));
        expect!(&braces).to_build(&Settings::default())?;
        let roots = format!("{}x{}", "\\sqrt{".repeat(depth / 2), "}".repeat(depth / 2));
        expect!(&roots).to_build(&display_settings())?;
        let fractions = format!(
            "{}x{}",
            "\\frac{".repeat(depth / 2),
            "}{1}".repeat(depth / 2)
        );
        expect!(&fractions).to_build(&display_settings())?;
        let once = get_parsed(&fractions, &Settings::default())?.to_latex();
        let twice = get_parsed(&once, &Settings::default())?.to_latex();
        assert_eq!(once, twice);
        Ok(())
    });

    it("should reject nesting past the depth limit", || {
        let depth = Settings::default().max_depth + 1;
        let braces = format!("{}x{}", "{".repeat(depth), "}".repeat(depth));
        let err = get_built(&braces, &Settings::default()).unwrap_err();
        assert_eq!(err.code(), "too-deeply-nested");
        Ok(())
    });

    it("should bound hand-built trees", || {
        let ctx = default_ctx();
        let chain = |levels: usize| {
            let mut tree = AtomTree::new();
            let mut id = tree.push(Atom::new(AtomKind::Ord, Mode::Math).with_value("x"));
            for _ in 1..levels {
                id = tree.push(Atom::new(
                    AtomKind::Surd {
                        body: vec![id],
                        index: None,
                    },
                    Mode::Math,
                ));
            }
            (tree, id)
        };
        let (tree, root) = chain(300);
        assert!(decompose(ctx, &tree, &LayoutContext::default(), &[root]).is_ok());
        let (tree, root) = chain(MAX_TREE_DEPTH + 1);
        let err = decompose(ctx, &tree, &LayoutContext::default(), &[root]).unwrap_err();
        assert_eq!(err.code(), "too-deeply-nested");
        Ok(())
    });

    it("should start in display style by default", || {
        let ctx = default_ctx();
        let parsed = get_parsed("\\sum_0^n", &Settings::default())?;
        let boxes = decompose(ctx, &parsed.tree, &LayoutContext::default(), &parsed.root)?;
        let display = get_built("\\sum_0^n", &display_settings())?;
        let total = boxes.iter().map(|b| b.width).sum::<f64>();
        assert!((total - display.width).abs() < 1e-9);
        Ok(())
    });
}

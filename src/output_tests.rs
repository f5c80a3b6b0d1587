#[cfg(test)]
mod tests {
    use crate::output::{Justify, OutputStream};
    use test_log::test;

    fn render(f: impl FnOnce(&mut OutputStream<&mut Vec<u8>>)) -> String {
        let mut sink = Vec::new();
        {
            let mut out = OutputStream::new(&mut sink);
            f(&mut out);
        }
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_default_float_is_shortest_representation() {
        let text = render(|out| out.write_float(9.99999).unwrap());
        assert_eq!(text, "9.99999");
    }

    #[test]
    fn test_precision_rounds_to_significant_digits() {
        assert_eq!(
            render(|out| out.precision(3).write_float(9.99999).unwrap()),
            "10"
        );
        assert_eq!(
            render(|out| out.precision(3).write_float(0.000123456).unwrap()),
            "0.000123"
        );
        assert_eq!(
            render(|out| out.precision(3).write_float(123456.0).unwrap()),
            "1.23e+05"
        );
        assert_eq!(
            render(|out| out.precision(3).write_float(100.0).unwrap()),
            "100"
        );
        assert_eq!(
            render(|out| out.precision(3).write_float(0.5).unwrap()),
            "0.5"
        );
        assert_eq!(
            render(|out| out.precision(1).write_float(9.99).unwrap()),
            "1e+01"
        );
        assert_eq!(
            render(|out| out.precision(3).write_float(-9.99999).unwrap()),
            "-10"
        );
        assert_eq!(
            render(|out| out.precision(3).write_float(0.0).unwrap()),
            "0"
        );
    }

    #[test]
    fn test_precision_persists_across_writes() {
        let text = render(|out| {
            out.precision(3);
            out.write_float(9.99999).unwrap();
            out.put(' ').unwrap();
            out.write_float(0.000123456).unwrap();
        });
        assert_eq!(text, "10 0.000123");
    }

    #[test]
    fn test_width_pads_right_justified_by_default() {
        let text = render(|out| out.width(10).write_str("10").unwrap());
        assert_eq!(text, "        10");
        assert_eq!(text.chars().count(), 10);
    }

    #[test]
    fn test_width_resets_after_one_write() {
        let text = render(|out| {
            out.width(10).write_str("10").unwrap();
            out.write_str("10").unwrap();
        });
        assert_eq!(text, "        1010");
    }

    #[test]
    fn test_width_ignored_when_content_is_wider() {
        let text = render(|out| out.width(3).write_str("wider than that").unwrap());
        assert_eq!(text, "wider than that");
    }

    #[test]
    fn test_fill_persists_width_does_not() {
        let text = render(|out| {
            out.width(10).fill('-').write_float(10.0).unwrap();
            out.put('\n').unwrap();
            out.write_float(10.0).unwrap();
            out.put('\n').unwrap();
            out.width(6).write_float(10.0).unwrap();
        });
        assert_eq!(text, "--------10\n10\n----10");
    }

    #[test]
    fn test_left_justify_pads_on_the_right() {
        let text = render(|out| {
            out.width(10)
                .fill('-')
                .justify(Justify::Left)
                .write_float(10.0)
                .unwrap();
        });
        assert_eq!(text, "10--------");
    }

    #[test]
    fn test_chained_directives_match_discrete_calls() {
        let discrete = render(|out| {
            out.precision(3);
            out.width(10);
            out.fill('-');
            out.justify(Justify::Left);
            out.write_float(9.99999).unwrap();
        });
        let chained = render(|out| {
            out.precision(3)
                .width(10)
                .fill('-')
                .justify(Justify::Left)
                .write_float(9.99999)
                .unwrap();
        });
        assert_eq!(discrete, chained);
        assert_eq!(chained, "10--------");
    }

    #[test]
    fn test_write_limited_emits_exactly_n_characters() {
        assert_eq!(
            render(|out| out.write_limited("words cannot describe", 4).unwrap()),
            "word"
        );
        assert_eq!(render(|out| out.write_limited("abc", 3).unwrap()), "abc");
        assert_eq!(render(|out| out.write_limited("abc", 10).unwrap()), "abc");
        assert_eq!(render(|out| out.write_limited("abc", 0).unwrap()), "");
    }

    #[test]
    fn test_write_limited_ignores_formatting_state() {
        let text = render(|out| {
            out.width(10).fill('-');
            out.write_limited("abcdef", 2).unwrap();
        });
        assert_eq!(text, "ab");
    }

    #[test]
    fn test_put_writes_a_bare_code_point() {
        let text = render(|out| {
            out.put(char::from(0xA5)).unwrap();
            out.put('\n').unwrap();
        });
        assert_eq!(text, "¥\n");
    }

    #[test]
    fn test_int_write_respects_width_and_justify() {
        assert_eq!(render(|out| out.width(5).write_int(42).unwrap()), "   42");
        assert_eq!(
            render(|out| out.width(5).justify(Justify::Left).write_int(-7).unwrap()),
            "-7   "
        );
    }

    #[test]
    fn test_non_finite_values_render_as_default() {
        assert_eq!(
            render(|out| out.precision(3).write_float(f32::NAN).unwrap()),
            "NaN"
        );
        assert_eq!(
            render(|out| out.precision(3).write_float(f32::INFINITY).unwrap()),
            "inf"
        );
    }

    #[test]
    fn test_newline_writes_terminator() {
        let text = render(|out| {
            out.write_str("line").unwrap();
            out.newline().unwrap();
        });
        assert_eq!(text, "line\n");
    }
}

use proptest::prelude::*;
use table_chart::core::ChartKind;
use table_chart::render::ColorThemeEngine;

fn any_kind() -> impl Strategy<Value = ChartKind> {
    proptest::sample::select(ChartKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn colors_cycle_with_the_palette_length(kind in any_kind(), index in 0usize..512) {
        let theme = ColorThemeEngine::default();
        let len = theme.palette_len(kind);
        prop_assert!(len > 0);
        prop_assert_eq!(theme.color_for(index, kind), theme.color_for(index + len, kind));
        prop_assert_eq!(theme.color_for(index, kind), theme.color_for(index % len, kind));
    }

    #[test]
    fn fills_are_stable_per_index(kind in any_kind(), index in 0usize..512, fill in any::<bool>()) {
        let theme = ColorThemeEngine::default();
        let len = theme.palette_len(kind);
        prop_assert_eq!(
            theme.fill_for(index, kind, fill),
            theme.fill_for(index + len, kind, fill)
        );
        let base_len = theme.palette_len(ChartKind::Line);
        prop_assert_eq!(theme.base_color(index), theme.base_color(index + base_len));
    }
}

use drawer_core::{render_tree, DrawerProps, SettingsDrawer};

use crate::cli::RowArgs;
use crate::commands::common::RenderContext;
use crate::error::CliError;

/// Build row props from the props file (if any) and the flags.
pub fn build_props(args: RowArgs) -> Result<DrawerProps, CliError> {
    let mut props = match &args.props {
        Some(path) => {
            tracing::debug!("Reading row props from {}", path.display());
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        }
        None => DrawerProps::default(),
    };

    if let Some(title) = args.title {
        props.title = title;
    }
    if args.description.is_some() {
        props.description = args.description;
    }
    if args.test_id.is_some() {
        props.test_id = args.test_id;
    }
    if args.title_color.is_some() {
        props.title_color = args.title_color;
    }
    props.no_border |= args.no_border;
    props.warning |= args.warning;
    if args.no_arrow {
        props.render_arrow_right = false;
    }
    Ok(props)
}

pub fn render_output(
    props: &DrawerProps,
    context: &RenderContext,
    as_json: bool,
) -> Result<String, CliError> {
    let tree = render_tree(props, &context.palette, &context.catalog);
    if as_json {
        Ok(serde_json::to_string_pretty(&tree)?)
    } else {
        Ok(tree.to_string())
    }
}

pub fn run_render(
    args: RowArgs,
    context: &RenderContext,
    as_json: bool,
    press: bool,
) -> Result<(), CliError> {
    let props = build_props(args)?;
    let output = render_output(&props, context, as_json)?;
    if as_json {
        println!("{output}");
    } else {
        print!("{output}");
    }

    if press {
        let title = props.title.clone();
        let drawer = SettingsDrawer::new(props).on_press_event(move |event| {
            match &event.test_id {
                Some(test_id) => eprintln!("onPress: {title} (testID={test_id})"),
                None => eprintln!("onPress: {title}"),
            }
        });
        drawer.press();
    }
    Ok(())
}

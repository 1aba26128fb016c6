use comrak::Options;
use log::warn;

/// Build comrak options from the configured extension names.
///
/// Unknown names are skipped with a diagnostic so a typo in the config file
/// degrades the rendering instead of failing the build.
pub fn create_options<'a>(extensions: &[String]) -> Options<'a> {
    let mut options = Options::default();

    for extension in extensions {
        match extension.as_str() {
            "tables" => options.extension.table = true,
            "strikethrough" => options.extension.strikethrough = true,
            "autolink" => options.extension.autolink = true,
            "tasklist" => options.extension.tasklist = true,
            "footnotes" => options.extension.footnotes = true,
            "highlight" => {
                // Tag fenced code blocks with their language for client-side
                // highlighters
                options.render.github_pre_lang = true;
                options.parse.default_info_string = Some("text".to_string());
            }
            "smart" => options.parse.smart = true,
            other => warn!("Unknown markdown extension: {}", other),
        }
    }

    options
}

// src/templates/layout.rs
use super::html_escape;

pub fn render_page(title: &str, content: &str, script_src: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} - Newsletter</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
    <main class="main">
        <div class="container">
            {}
        </div>
    </main>

    <script type="module">
        import init, {{ attach_signup_form }} from "{}";
        await init();
        attach_signup_form();
    </script>
</body>
</html>"#,
        html_escape(title),
        content,
        html_escape(script_src)
    )
}

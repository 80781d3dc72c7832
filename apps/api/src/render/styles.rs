// Inline stylesheets. Documents embed these so they render and print with no
// external assets.

pub const RESUME_CSS: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.5;
            color: #333;
            max-width: 8.5in;
            margin: 0 auto;
            padding: 0.5in;
            font-size: 11pt;
        }
        .header { text-align: center; border-bottom: 2px solid #2563eb; padding-bottom: 20px; margin-bottom: 30px; }
        .name { font-size: 24pt; font-weight: bold; color: #1f2937; margin-bottom: 8px; }
        .title { font-size: 14pt; color: #2563eb; margin-bottom: 15px; }
        .contact { font-size: 10pt; color: #6b7280; }
        .links { margin-top: 10px; }
        .links a { color: #2563eb; text-decoration: none; margin-right: 15px; }
        .section { margin-bottom: 25px; }
        .section-title {
            font-size: 14pt;
            font-weight: bold;
            color: #1f2937;
            border-bottom: 1px solid #e5e7eb;
            padding-bottom: 5px;
            margin-bottom: 15px;
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }
        .item { margin-bottom: 15px; }
        .item-title { font-weight: bold; color: #1f2937; }
        .item-subtitle { color: #6b7280; font-style: italic; }
        .item-date { color: #6b7280; font-size: 10pt; }
        .skill-group { margin-bottom: 15px; }
        .skills { display: flex; flex-wrap: wrap; gap: 8px; }
        .skill { background: #f3f4f6; padding: 4px 12px; border-radius: 12px; font-size: 10pt; color: #374151; }
        ul { margin: 8px 0; padding-left: 20px; }
        li { margin-bottom: 4px; }
        @media print { body { margin: 0; padding: 0.5in; } }
    "#;

pub const COVER_LETTER_CSS: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 8.5in;
            margin: 0 auto;
            padding: 1in;
            font-size: 12pt;
        }
        .date { text-align: right; margin-bottom: 30px; }
        .sender, .recipient, .content { margin-bottom: 30px; }
        .content p { margin-bottom: 16px; }
        .generated { white-space: pre-line; }
        .signature { margin-top: 40px; }
        @media print { body { margin: 0; padding: 1in; } }
    "#;

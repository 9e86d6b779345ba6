pub const GLOBAL_CSS: &str = r#"
    :root {
        --background: #faf7f2;
        --foreground: #2b2420;
        --muted: #7a6e66;
        --accent: #c08a3e;
        --card: #ffffff;
        --border: rgba(43, 36, 32, 0.12);
        --dark: #2b2420;
        --dark-foreground: #f5efe6;
    }
    body {
        margin: 0;
        background: var(--background);
        color: var(--foreground);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: transparent;
        border-bottom: 1px solid transparent;
        transition: background 0.5s, box-shadow 0.5s;
    }
    .top-nav.scrolled {
        background: rgba(250, 247, 242, 0.9);
        backdrop-filter: blur(16px);
        border-bottom-color: var(--border);
        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.06);
    }
    .nav-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        max-width: 1200px;
        margin: 0 auto;
        padding: 12px 24px;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 8px;
        font-size: 1.5rem;
        font-weight: 700;
        color: inherit;
        text-decoration: none;
    }
    .nav-logo-mark {
        display: inline-flex;
        width: 32px;
        height: 32px;
        border-radius: 8px;
        background: var(--accent);
        color: #fff;
        align-items: center;
        justify-content: center;
        font-size: 0.875rem;
    }
    .nav-desktop {
        display: flex;
        align-items: center;
        gap: 4px;
    }
    .nav-link, .mobile-link {
        position: relative;
        padding: 8px 16px;
        border-radius: 999px;
        color: var(--muted);
        text-decoration: none;
        transition: color 0.3s;
    }
    .nav-link.active, .mobile-link.active {
        color: var(--accent);
    }
    .nav-indicator {
        position: absolute;
        inset: 0;
        border-radius: 999px;
        background: rgba(192, 138, 62, 0.1);
        z-index: -1;
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: inherit;
        padding: 8px;
        cursor: pointer;
    }
    .mobile-menu {
        display: flex;
        flex-direction: column;
        gap: 4px;
        padding: 20px;
        background: rgba(250, 247, 242, 0.95);
        border-bottom: 1px solid var(--border);
        animation: menuIn 0.25s ease-out;
    }
    @keyframes menuIn {
        from { opacity: 0; transform: translateY(-10px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .btn {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        border-radius: 999px;
        cursor: pointer;
        font: inherit;
    }
    .btn-default { background: var(--accent); color: #fff; border: none; }
    .btn-outline { background: rgba(245, 239, 230, 0.1); color: var(--dark-foreground); border: 1px solid rgba(245, 239, 230, 0.25); }
    .btn-sm { padding: 6px 24px; font-size: 0.875rem; }
    .btn-md { padding: 10px 28px; }
    .btn-lg { padding: 14px 32px; font-size: 1rem; }
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        overflow: hidden;
        color: var(--dark-foreground);
    }
    .hero-background, .hero-overlay {
        position: absolute;
        inset: 0;
    }
    .hero-image {
        width: 100%;
        height: 100%;
        object-fit: cover;
        animation: heroZoom 1.5s ease-out;
    }
    .hero-overlay {
        background: linear-gradient(90deg, rgba(43, 36, 32, 0.85), rgba(43, 36, 32, 0.3));
    }
    @keyframes heroZoom {
        from { transform: scale(1.1); }
        to { transform: scale(1); }
    }
    .hero-content {
        position: relative;
        max-width: 1200px;
        margin: 0 auto;
        padding: 128px 24px;
        width: 100%;
    }
    .hero-content > * {
        max-width: 640px;
        animation: riseIn 0.6s ease-out both;
    }
    .hero-content > :nth-child(2) { animation-delay: 0.15s; }
    .hero-content > :nth-child(3) { animation-delay: 0.3s; }
    .hero-content > :nth-child(4) { animation-delay: 0.45s; }
    .hero-content > :nth-child(5) { animation-delay: 0.7s; }
    @keyframes riseIn {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .hero-title { font-size: 4rem; line-height: 1.08; margin: 0 0 24px; }
    .hero-subtitle { font-size: 1.25rem; opacity: 0.7; margin-bottom: 40px; }
    .hero-cta-group { display: flex; flex-wrap: wrap; gap: 16px; }
    .hero-stats { display: flex; gap: 32px; margin-top: 64px; padding-top: 32px; border-top: 1px solid rgba(245, 239, 230, 0.15); }
    .hero-stat-value { font-size: 1.5rem; font-weight: 700; margin: 0; }
    .hero-stat-label { font-size: 0.75rem; opacity: 0.5; margin: 2px 0 0; }
    .text-gradient-gold {
        background: linear-gradient(90deg, #d9a75a, #c08a3e);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .features-section, .process-section, .gallery-section, .cta-section {
        padding: 128px 24px;
    }
    .process-section { background: rgba(234, 226, 214, 0.5); }
    .section-head { text-align: center; margin: 0 auto 64px; max-width: 720px; }
    .section-eyebrow { font-size: 0.875rem; letter-spacing: 0.2em; text-transform: uppercase; color: var(--accent); }
    .section-subtitle { color: var(--muted); font-size: 1.125rem; }
    .features-grid, .steps-grid, .gallery-grid {
        display: grid;
        gap: 24px;
        max-width: 1200px;
        margin: 0 auto;
    }
    .features-grid { grid-template-columns: repeat(3, 1fr); }
    .steps-grid { grid-template-columns: repeat(4, 1fr); }
    .gallery-grid { grid-template-columns: repeat(3, 1fr); }
    .feature-card, .gallery-card {
        background: var(--card);
        border: 1px solid var(--border);
        border-radius: 12px;
        overflow: hidden;
    }
    .feature-card { padding: 32px; }
    .feature-icon, .step-icon { color: var(--accent); }
    .step { position: relative; text-align: center; }
    .step-connector {
        position: absolute;
        top: 40px;
        left: 60%;
        width: 80%;
        height: 1px;
        background: var(--border);
    }
    .step-number { font-size: 0.75rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; color: var(--accent); }
    .gallery-image { aspect-ratio: 4 / 3; overflow: hidden; }
    .gallery-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
    .gallery-card:hover .gallery-image img { transform: scale(1.05); }
    .gallery-body { padding: 24px; }
    .gallery-tags { display: flex; flex-wrap: wrap; gap: 8px; }
    .gallery-tag { font-size: 0.75rem; padding: 4px 12px; border-radius: 999px; background: rgba(192, 138, 62, 0.1); color: var(--accent); }
    .cta-section { background: var(--dark); color: var(--dark-foreground); text-align: center; }
    .cta-content { max-width: 720px; margin: 0 auto; }
    .cta-content h2 { font-size: 3.5rem; }
    .reveal .reveal-item {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.5s ease-out, transform 0.5s ease-out;
    }
    .reveal.revealed .reveal-item {
        opacity: 1;
        transform: translateY(0);
    }
    .site-footer { background: var(--dark); color: var(--dark-foreground); padding: 48px 24px; }
    .footer-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 24px;
        max-width: 1200px;
        margin: 0 auto;
    }
    .footer-brand { display: flex; align-items: center; gap: 12px; }
    .footer-logo { font-size: 1.25rem; font-weight: 700; }
    .footer-copyright { font-size: 0.875rem; opacity: 0.5; }
    .footer-social, .footer-links { display: flex; gap: 24px; }
    .footer-social a, .footer-links a { color: inherit; opacity: 0.6; text-decoration: none; }
    .not-found-page { padding: 160px 24px; text-align: center; }
    @media (max-width: 768px) {
        .nav-desktop { display: none; }
        .burger-menu { display: inline-flex; }
        .features-grid, .steps-grid, .gallery-grid { grid-template-columns: 1fr; }
        .step-connector { display: none; }
        .hero-title { font-size: 3rem; }
        .footer-content { flex-direction: column; }
    }
"#;

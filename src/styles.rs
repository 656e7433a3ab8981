//! Static style rules backing the scripted effects: scroll reveals, the
//! active nav link, the signup success message, chart spinners and image
//! lazy-load states. Served once through stylist's `Global` in the app
//! shell; everything layout-related lives in the site stylesheet.

pub const EFFECT_STYLES: &str = r#"
    .fade-in-element {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }

    .animate-in {
        opacity: 1;
        transform: translateY(0);
    }

    .nav-link.active {
        color: var(--color-primary) !important;
        font-weight: var(--font-weight-semibold);
    }

    .top-nav {
        transition: transform 0.3s ease;
    }

    .top-nav.hidden {
        transform: translateY(-100%);
    }

    .success-message {
        text-align: center;
        padding: var(--space-16);
        border-radius: var(--radius-base);
        background: rgba(var(--color-success-rgb), 0.1);
        border: 1px solid rgba(var(--color-success-rgb), 0.2);
    }

    .success-message p {
        color: var(--color-success);
        margin-top: 16px;
        font-weight: 500;
    }

    @keyframes spin {
        to {
            transform: rotate(360deg);
        }
    }

    .loading-state {
        text-align: center;
        padding: 20px;
    }

    .loading-spinner {
        display: inline-block;
        width: 20px;
        height: 20px;
        border: 2px solid var(--color-border);
        border-radius: 50%;
        border-top-color: var(--color-primary);
        animation: spin 1s ease-in-out infinite;
    }

    .loading-state p {
        margin-top: 10px;
        color: var(--color-text-secondary);
    }

    .lazy-load {
        transition: opacity 0.3s ease;
        opacity: 0.7;
    }

    .lazy-load.loaded {
        opacity: 1;
    }
"#;

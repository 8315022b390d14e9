//! Global CSS styles for Tourguard.
//!
//! Dark "night patrol" palette: slate background, teal for actions, amber
//! for anything emergency related.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #0b1220;
  --night-card: #111a2e;
  --night-border: #1f2a44;

  /* SIGNAL TEAL (Actions, Focus) */
  --teal: #14b8a6;
  --teal-glow: rgba(20, 184, 166, 0.25);
  --teal-ink: #04201d;

  /* ALERT */
  --amber: #f59e0b;
  --danger: #ef4444;
  --danger-bg: rgba(239, 68, 68, 0.1);

  /* TEXT */
  --text-primary: #e5e7eb;
  --text-muted: #94a3b8;

  --font-sans: 'Inter', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--night);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-size: 2.5rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: 0.75rem;
}

.page-title-accent {
  display: block;
  color: var(--teal);
}

.section-header {
  font-size: 1.125rem;
  font-weight: 600;
}

.tagline, .muted {
  color: var(--text-muted);
}

.tagline {
  max-width: 36rem;
  margin: 0 auto 2.5rem;
  font-size: 1.05rem;
}

.mono { font-family: var(--font-mono); }
.warning-text { color: var(--amber); }
.link { color: var(--teal); }

/* === Layout === */
.portal, .page-centered {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 3rem 1rem;
}

.portal-backdrop {
  position: absolute;
  inset: 0;
  background: radial-gradient(ellipse at top, rgba(20, 184, 166, 0.12), transparent 60%);
  pointer-events: none;
}

.hero {
  position: relative;
  text-align: center;
  max-width: 48rem;
}

.hero-badge {
  display: inline-flex;
  padding: 1rem;
  font-size: 2.5rem;
  border-radius: 1rem;
  border: 1px solid var(--teal-glow);
  box-shadow: 0 0 24px var(--teal-glow);
  margin-bottom: 1.5rem;
}

.portal-tiles {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 1rem;
  max-width: 32rem;
  margin: 0 auto;
}

.portal-tile {
  text-align: left;
  background: var(--night-card);
  border: 1px solid var(--night-border);
  border-radius: 0.75rem;
  padding: 1.5rem;
  color: inherit;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.portal-tile:hover {
  border-color: var(--teal);
  background: rgba(20, 184, 166, 0.05);
}

.portal-tile-icon { font-size: 1.75rem; }
.portal-tile-title { font-weight: 600; margin: 0.5rem 0 0.25rem; }
.portal-tile-caption { font-size: 0.75rem; color: var(--text-muted); margin-bottom: 0.75rem; }
.portal-tile-action { font-size: 0.75rem; color: var(--teal); }

/* === Cards === */
.tourist-card-wrapper {
  position: relative;
  width: 100%;
  max-width: 28rem;
}

.card {
  background: var(--night-card);
  border: 1px solid var(--night-border);
  border-radius: 0.75rem;
  padding: 1.5rem;
}

.card-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.25rem;
}

.card-header-icon {
  padding: 0.4rem;
  border-radius: 0.5rem;
  border: 1px solid var(--teal-glow);
}

/* === Tabs === */
.tabs {
  display: flex;
  gap: 0.25rem;
  padding: 0.25rem;
  background: rgba(31, 42, 68, 0.5);
  border-radius: 0.5rem;
  margin-bottom: 1.25rem;
}

.tab {
  flex: 1;
  padding: 0.5rem;
  border: none;
  border-radius: 0.375rem;
  background: transparent;
  color: var(--text-muted);
  font-weight: 500;
  cursor: pointer;
}

.tab-active {
  background: var(--teal);
  color: var(--teal-ink);
}

/* === Forms === */
.form-stack {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.input-label {
  display: block;
  font-size: 0.75rem;
  color: var(--text-muted);
  margin-bottom: 0.25rem;
}

.input-wrapper { position: relative; }

.input-icon {
  position: absolute;
  left: 0.75rem;
  top: 0.55rem;
  color: var(--text-muted);
}

.input-icon-warning { color: var(--amber); }

.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  background: var(--night);
  border: 1px solid var(--night-border);
  border-radius: 0.375rem;
  color: var(--text-primary);
  font: inherit;
}

.input-field-with-icon { padding-left: 2.25rem; }

.input-field:focus {
  outline: none;
  border-color: var(--teal);
  box-shadow: 0 0 0 3px var(--teal-glow);
}

.error-banner {
  font-size: 0.875rem;
  color: var(--danger);
  background: var(--danger-bg);
  border: 1px solid rgba(239, 68, 68, 0.2);
  border-radius: 0.375rem;
  padding: 0.5rem;
  margin-bottom: 1rem;
}

.demo-hint {
  font-size: 0.75rem;
  text-align: center;
  color: var(--text-muted);
}

.demo-email {
  font-family: var(--font-mono);
  color: var(--teal);
}

/* === Buttons === */
.btn-primary {
  padding: 0.6rem 1rem;
  border: none;
  border-radius: 0.375rem;
  background: var(--teal);
  color: var(--teal-ink);
  font-weight: 600;
  cursor: pointer;
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: progress;
}

.btn-ghost {
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: 0.875rem;
  cursor: pointer;
  margin-bottom: 1.5rem;
}

.btn-ghost:hover { color: var(--text-primary); }
.btn-wide { width: 100%; }

/* === Digital ID === */
.id-card { width: 100%; max-width: 28rem; }
.id-name { font-size: 1.5rem; font-weight: 700; }

.id-number {
  font-family: var(--font-mono);
  color: var(--teal);
  margin-bottom: 1.25rem;
}

.id-details {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: 0.35rem 1rem;
  margin-bottom: 1.5rem;
}

.id-details dt { color: var(--text-muted); font-size: 0.875rem; }

/* === Dashboard === */
.dashboard {
  max-width: 64rem;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.dashboard-header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  margin-bottom: 1.5rem;
}

.tourist-table {
  width: 100%;
  border-collapse: collapse;
  margin-top: 1rem;
  font-size: 0.875rem;
}

.tourist-table th, .tourist-table td {
  text-align: left;
  padding: 0.5rem;
  border-bottom: 1px solid var(--night-border);
}

.tourist-table th { color: var(--text-muted); font-weight: 500; }

.startup-failure {
  padding: 3rem;
  text-align: center;
}
"#;

//! Global CSS styles for the DAIN portfolio.
//!
//! Dark slate, frosted glass panels and cyan neon accents.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600;700&family=Orbitron:wght@400;700;900&display=swap');

/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --slate-950: #020617;
  --slate-900: #0f172a;
  --slate-800: #1e293b;

  /* Accents */
  --cyan-400: #22d3ee;
  --cyan-500: #06b6d4;
  --cyan-600: #0891b2;
  --blue-500: #3b82f6;
  --purple-400: #c084fc;
  --purple-600: #9333ea;

  /* Text */
  --text-primary: #ffffff;
  --text-secondary: #cbd5e1;
  --text-muted: #94a3b8;

  /* Glass */
  --glass-bg: rgba(255, 255, 255, 0.03);
  --glass-border: rgba(255, 255, 255, 0.08);

  /* Typography */
  --font-display: 'Orbitron', 'Inter', sans-serif;
  --font-body: 'Inter', 'Pretendard', system-ui, sans-serif;

  /* Layout */
  --content-width: 80rem;
  --header-height: 5rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--slate-950);
  color: var(--text-primary);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

.page {
  position: relative;
  overflow: hidden;
}

.page-main {
  position: relative;
  z-index: 10;
}

/* === Shared surfaces === */
.glass {
  background: var(--glass-bg);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
  border: 1px solid var(--glass-border);
}

.bg-grid {
  background-image:
    linear-gradient(rgba(34, 211, 238, 0.05) 1px, transparent 1px),
    linear-gradient(90deg, rgba(34, 211, 238, 0.05) 1px, transparent 1px);
  background-size: 40px 40px;
}

.bg-grid.faint {
  position: absolute;
  inset: 0;
  opacity: 0.2;
}

.gradient-text {
  color: transparent;
  background: linear-gradient(90deg, var(--cyan-400), var(--blue-500), var(--purple-600));
  -webkit-background-clip: text;
  background-clip: text;
  text-shadow: 0 0 40px rgba(34, 211, 238, 0.35);
}

.accent {
  color: var(--cyan-400);
}

.icon {
  flex-shrink: 0;
}

/* === Buttons === */
.btn-primary,
.btn-glass,
.btn-inverse {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 1rem 2rem;
  border-radius: 0.5rem;
  font-weight: 700;
  transition: all 300ms ease;
}

.btn-primary {
  background: var(--cyan-600);
  box-shadow: 0 10px 25px rgba(8, 145, 178, 0.2);
}

.btn-primary:hover {
  background: var(--cyan-500);
}

.btn-primary .arrow {
  transition: transform 200ms ease;
}

.btn-primary:hover .arrow {
  transform: translateX(4px);
}

.btn-glass {
  background: var(--glass-bg);
  border: 1px solid var(--glass-border);
  backdrop-filter: blur(12px);
}

.btn-glass:hover {
  background: rgba(255, 255, 255, 0.05);
}

.btn-inverse {
  padding: 1.25rem 3rem;
  border-radius: 9999px;
  background: #ffffff;
  color: #000000;
  box-shadow: 0 0 30px rgba(34, 211, 238, 0.3);
}

.btn-inverse:hover {
  background: var(--cyan-400);
}

.btn-text {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--cyan-400);
}

/* === Background3D === */
.background-3d {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  overflow: hidden;
}

.starfield {
  position: absolute;
  inset: -10%;
  width: 120%;
  height: 120%;
  fill: none;
  transform-origin: 50% 50%;
}

.starfield.soft .star-layer {
  filter: blur(0.4px);
}

.sphere-anchor {
  position: absolute;
  transform: translate(-50%, -50%);
}

.sphere-bob,
.sphere-surface {
  width: 100%;
  height: 100%;
}

.sphere-surface {
  position: relative;
  border-radius: 50%;
  box-shadow: 0 0 80px color-mix(in srgb, var(--sphere-color) 40%, transparent);
}

.sphere-gloss {
  position: absolute;
  top: 18%;
  right: 22%;
  width: 22%;
  height: 22%;
  border-radius: 50%;
  background: radial-gradient(circle, rgba(255, 255, 255, 0.7), transparent 70%);
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  border-width: 0 0 1px 0;
  border-color: rgba(255, 255, 255, 0.05);
}

.site-header-inner {
  max-width: var(--content-width);
  height: var(--header-height);
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 700;
  letter-spacing: -0.05em;
  color: var(--cyan-400);
  animation: slide-in 500ms ease-out both;
}

.logo-suffix {
  color: var(--text-primary);
}

.nav-links {
  display: none;
  gap: 2rem;
  font-size: 0.875rem;
  font-weight: 500;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--text-secondary);
}

.nav-link {
  transition: color 150ms ease;
}

.nav-link:hover {
  color: var(--cyan-400);
}

.menu-toggle {
  display: inline-flex;
  color: var(--text-primary);
}

.mobile-menu {
  overflow: hidden;
}

.mobile-menu-links {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
  text-align: center;
}

.mobile-menu-link {
  font-family: var(--font-display);
  font-size: 1.125rem;
}

.presence-enter {
  animation: expand 300ms ease-out both;
}

.presence-exit {
  animation: collapse var(--presence-exit, 250ms) ease-in both;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--header-height) 1.5rem 0;
}

.hero-grid {
  max-width: var(--content-width);
  margin: 0 auto;
  display: grid;
  gap: 3rem;
  align-items: center;
}

.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  margin-bottom: 1.5rem;
  border-radius: 9999px;
  border-color: rgba(6, 182, 212, 0.3);
  color: var(--cyan-400);
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.hero-title {
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 700;
  line-height: 1.2;
  margin-bottom: 1.5rem;
}

.hero-tagline {
  max-width: 32rem;
  margin-bottom: 2rem;
  font-size: 1.125rem;
  color: var(--text-muted);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.hero-visual {
  position: relative;
  display: none;
}

.core-panel {
  position: relative;
  width: 100%;
  aspect-ratio: 1;
  border-radius: 1.5rem;
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
}

.core-glow {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top right, rgba(6, 182, 212, 0.2), transparent);
}

.ring-outer {
  width: 16rem;
  height: 16rem;
  border: 2px dashed rgba(6, 182, 212, 0.3);
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
}

.ring-inner {
  width: 12rem;
  height: 12rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
}

.core-icon {
  color: var(--cyan-400);
}

.core-meter {
  position: absolute;
  left: 2rem;
  right: 2rem;
  bottom: 2rem;
  padding: 1.5rem;
  border-radius: 0.75rem;
}

.core-meter-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

.core-meter-label {
  font-size: 0.75rem;
  letter-spacing: -0.05em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.core-meter-value {
  font-weight: 700;
  color: var(--cyan-400);
}

.core-meter-track {
  width: 100%;
  height: 0.25rem;
  border-radius: 9999px;
  background: var(--slate-800);
  overflow: hidden;
}

.core-meter-fill {
  height: 100%;
  background: var(--cyan-400);
}

/* === Sections === */
.section {
  position: relative;
  padding: 6rem 1.5rem;
}

.section-inner {
  max-width: var(--content-width);
  margin: 0 auto;
}

.section-inner.layered {
  position: relative;
  z-index: 10;
}

.section-heading {
  display: flex;
  flex-direction: column;
  margin-bottom: 4rem;
}

.section-heading.centered {
  align-items: center;
  text-align: center;
}

.section-eyebrow {
  margin-bottom: 0.5rem;
  font-size: 0.875rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--cyan-400);
}

.section-title {
  font-family: var(--font-display);
  font-size: 1.875rem;
  font-weight: 700;
}

.section-underline {
  width: 5rem;
  height: 0.25rem;
  margin-top: 1rem;
  border-radius: 9999px;
  background: var(--cyan-500);
}

.card-title {
  margin-bottom: 0.5rem;
  font-size: 1.25rem;
  font-weight: 700;
}

.card-text {
  font-size: 0.875rem;
  line-height: 1.7;
  color: var(--text-muted);
}

/* Experience */
.career-grid {
  display: grid;
  gap: 2rem;
}

.career-card {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 1rem;
  height: 100%;
  padding: 2rem;
  border-radius: 1rem;
  border-color: rgba(255, 255, 255, 0.05);
}

.lift {
  transition: transform 250ms ease;
}

.lift:hover {
  transform: translateY(-10px);
}

.career-icon {
  width: 3rem;
  height: 3rem;
  border-radius: 0.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(6, 182, 212, 0.1);
  color: var(--cyan-400);
}

/* Services */
.services-grid {
  display: grid;
  gap: 1.5rem;
}

.service-card {
  height: 100%;
  padding: 2rem;
  border-radius: 1.5rem;
  cursor: default;
  transition: border-color 300ms ease;
}

.service-card:hover {
  border-color: rgba(6, 182, 212, 0.5);
}

.service-ordinal {
  margin-bottom: 1.5rem;
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 700;
  color: rgba(255, 255, 255, 0.05);
  transition: color 300ms ease;
}

.service-card:hover .service-ordinal {
  color: rgba(6, 182, 212, 0.2);
}

.service-card:hover .card-title {
  color: var(--cyan-400);
}

/* Strengths */
.strengths {
  overflow: hidden;
  background: var(--slate-950);
}

.strengths-grid {
  display: grid;
  gap: 4rem;
  align-items: center;
}

.strengths-title {
  margin-bottom: 2rem;
  font-family: var(--font-display);
  font-size: 2.25rem;
  font-weight: 700;
}

.strength-list {
  display: flex;
  flex-direction: column;
  gap: 3rem;
}

.strength-item {
  display: flex;
  gap: 1.5rem;
  align-items: flex-start;
}

.strength-number {
  width: 2.5rem;
  height: 2.5rem;
  flex-shrink: 0;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--cyan-500);
  color: #000000;
  font-weight: 700;
}

.badge-stage {
  position: relative;
  width: 100%;
  aspect-ratio: 1;
}

.stat-badge {
  position: absolute;
  width: 12rem;
  height: 12rem;
  padding: 1.5rem;
  border-radius: 1rem;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
}

.badge-top {
  top: 0;
  right: 0;
  border-color: rgba(6, 182, 212, 0.3);
}

.badge-top .stat-value {
  color: var(--cyan-400);
}

.badge-bottom {
  bottom: 0;
  left: 0;
  border-color: rgba(168, 85, 247, 0.3);
}

.badge-bottom .stat-value {
  color: var(--purple-400);
}

.stat-value {
  font-size: 1.875rem;
  font-weight: 700;
}

.stat-label {
  font-size: 0.75rem;
  text-transform: uppercase;
  color: var(--text-muted);
}

.badge-glow {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 8rem;
  height: 8rem;
  transform: translate(-50%, -50%);
  border-radius: 50%;
  background: var(--cyan-500);
  filter: blur(80px);
  opacity: 0.2;
}

/* Contact */
.contact-card {
  position: relative;
  max-width: 56rem;
  margin: 0 auto;
  padding: 3rem;
  border-radius: 2.5rem;
  border-color: rgba(6, 182, 212, 0.2);
  text-align: center;
  overflow: hidden;
}

.contact-rule {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 0.25rem;
  background: linear-gradient(90deg, transparent, var(--cyan-500), transparent);
}

.contact-title {
  margin-bottom: 1.5rem;
  font-family: var(--font-display);
  font-size: 2.25rem;
  font-weight: 700;
}

.contact-text {
  margin-bottom: 2.5rem;
  font-size: 1.125rem;
  color: var(--text-muted);
}

/* === Footer === */
.site-footer {
  position: relative;
  z-index: 10;
  padding: 5rem 1.5rem;
  border-width: 1px 0 0 0;
  border-color: rgba(255, 255, 255, 0.05);
}

.footer-inner {
  max-width: var(--content-width);
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  align-items: center;
  gap: 2.5rem;
}

.footer-brand {
  text-align: center;
}

.footer-logo {
  margin-bottom: 1rem;
  font-family: var(--font-display);
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--cyan-400);
}

.footer-tagline {
  max-width: 24rem;
  margin-bottom: 1.5rem;
  color: var(--text-muted);
}

.social-links {
  display: flex;
  gap: 1rem;
  justify-content: center;
}

.social-link {
  display: inline-flex;
  padding: 0.5rem;
  border-radius: 9999px;
  transition: color 150ms ease;
}

.social-link:hover {
  color: var(--cyan-400);
}

.footer-meta {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
}

.copyright {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Reveal on scroll === */
.reveal {
  opacity: 0;
  transition-property: opacity, transform;
  transition-duration: 600ms;
  transition-timing-function: ease-out;
}

.reveal-fade-up {
  transform: translateY(30px);
}

.reveal-scale {
  transform: scale(0.9);
}

.reveal-slide-right {
  transform: translateX(-50px);
}

.reveal.is-revealed {
  opacity: 1;
  transform: none;
}

/* === Keyframes === */
@keyframes fade-up {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: none; }
}

@keyframes scale-in {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: none; }
}

@keyframes slide-in {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: none; }
}

@keyframes expand {
  from { max-height: 0; opacity: 0; }
  to { max-height: 24rem; opacity: 1; }
}

@keyframes collapse {
  from { max-height: 24rem; opacity: 1; }
  to { max-height: 0; opacity: 0; }
}

@keyframes spin-pulse {
  0% { transform: rotate(0deg) scale(1); }
  50% { transform: rotate(180deg) scale(1.1); }
  100% { transform: rotate(360deg) scale(1); }
}

@keyframes spin-reverse {
  from { transform: rotate(360deg); }
  to { transform: rotate(0deg); }
}

@keyframes fill-bar {
  from { width: 0; }
  to { width: var(--fill-to); }
}

@keyframes drift {
  0%, 100% { transform: translateY(0) rotate(0deg); }
  50% { transform: translateY(var(--drift-lift)) rotate(var(--drift-tilt)); }
}

@keyframes twinkle {
  0%, 100% { opacity: 0.35; }
  50% { opacity: 1; }
}

@keyframes star-drift {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

@keyframes bob {
  0%, 100% { transform: translateY(0) rotate(0deg); }
  50% { transform: translateY(calc(var(--bob) * -1)) rotate(var(--roll)); }
}

@keyframes wobble {
  0%, 100% {
    border-radius: calc(50% + var(--blob)) calc(50% - var(--blob)) calc(50% + var(--blob)) calc(50% - var(--blob));
  }
  33% {
    border-radius: calc(50% - var(--blob)) calc(50% + var(--blob)) calc(50% - var(--blob)) calc(50% + var(--blob));
    filter: hue-rotate(20deg);
  }
  66% {
    border-radius: calc(50% + var(--blob)) calc(50% + var(--blob)) calc(50% - var(--blob)) calc(50% - var(--blob));
  }
}

/* === Responsive === */
@media (min-width: 768px) {
  .nav-links {
    display: flex;
  }

  .menu-toggle,
  .mobile-menu {
    display: none;
  }

  .hero-grid,
  .strengths-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .hero-visual {
    display: block;
  }

  .hero-title {
    font-size: 6rem;
  }

  .hero-tagline {
    font-size: 1.25rem;
  }

  .section-title {
    font-size: 3rem;
  }

  .strengths-title {
    font-size: 3.75rem;
  }

  .career-grid {
    grid-template-columns: repeat(3, minmax(0, 1fr));
  }

  .services-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .footer-inner {
    flex-direction: row;
  }

  .footer-brand {
    text-align: left;
  }

  .social-links {
    justify-content: flex-start;
  }

  .footer-meta {
    align-items: flex-end;
  }
}

@media (min-width: 1024px) {
  .services-grid {
    grid-template-columns: repeat(4, minmax(0, 1fr));
  }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }

  .reveal {
    opacity: 1;
    transform: none;
  }
}
"#;

//! Page stylesheet. The drivers only toggle classes and inline transforms;
//! everything they toggle is given meaning here.

pub const STYLES: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; background: #0b0b14; color: #e5e7eb; font-family: system-ui, -apple-system, sans-serif; }
h2 { font-size: 40px; margin: 0 0 32px 0; letter-spacing: -1px; }

.hero-section { position: relative; height: 400vh; }
.sticky-container {
    position: sticky; top: 0; height: 100vh; overflow: hidden;
    display: flex; flex-direction: column; align-items: center; justify-content: center;
    background-color: #0b0b14; background-size: cover; background-position: center;
    transition: background-image 0.4s ease;
}
.sticky-container h1 { position: relative; z-index: 2; font-size: 56px; text-align: center; margin: 0 20px 48px; }
.bg-video {
    position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;
    opacity: 0; transition: opacity 0.6s ease; z-index: 0;
}
.bg-video.video-active { opacity: 0.45; }

.cube-scene { position: relative; z-index: 2; width: 220px; height: 220px; perspective: 900px; }
.cube { position: relative; width: 100%; height: 100%; transform-style: preserve-3d; transition: transform 0.1s linear; }
.cube-face {
    position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;
    background: rgba(20, 20, 40, 0.85); border: 1px solid #3b3b6b; font-size: 22px; font-weight: 600;
    backface-visibility: hidden;
}
.cube-face.front { transform: translateZ(110px); }
.cube-face.back  { transform: rotateY(180deg) translateZ(110px); }
.cube-face.left  { transform: rotateY(-90deg) translateZ(110px); }
.cube-face.right { transform: rotateY(90deg) translateZ(110px); }
.cube-face.top   { transform: rotateX(90deg) translateZ(110px); }
.cube-logo { width: 100%; height: 100%; object-fit: cover; }

.services-section { position: relative; height: 300vh; }
.services-sticky { position: sticky; top: 0; height: 100vh; overflow: hidden; display: flex; align-items: center; }
.horizontal-track { display: flex; gap: 48px; padding: 0 10vw; will-change: transform; }
.service-item {
    flex: 0 0 60vw; min-height: 50vh; padding: 48px; border-radius: 16px;
    background: #14142a; border: 1px solid #2a2a4a; opacity: 0.3; transition: opacity 0.6s ease;
}
.service-item.active { opacity: 1; }
.service-title { font-size: 44px; margin: 0 0 24px 0; }
.service-desc p { font-size: 20px; line-height: 1.6; color: #9ca3af; margin: 0; }

.split-text-container .split-word {
    display: inline-block; opacity: 0; transform: translateY(0.6em);
    transition: opacity 0.5s ease, transform 0.5s ease;
    transition-delay: calc(var(--index) * 40ms);
}
.service-item.active .split-word { opacity: 1; transform: none; }

@media (max-width: 767px) {
    .services-section { height: auto; }
    .services-sticky { position: static; height: auto; }
    .horizontal-track { flex-direction: column; padding: 24px; }
    .service-item { flex-basis: auto; }
    .sticky-container h1 { font-size: 34px; }
}

.projects, .pricing { padding: 120px 10vw; }
.project-grid, .price-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; }
.project-item, .price-card { background: #14142a; border: 1px solid #2a2a4a; border-radius: 12px; padding: 28px; }
.price { font-size: 32px; font-weight: 700; color: #22c55e; margin: 8px 0 12px; }

.reveal-pending { opacity: 0; transform: translateY(40px); transition: opacity 0.8s ease, transform 0.8s ease; }
.reveal-pending.in-view { opacity: 1; transform: none; }

.float-whatsapp {
    position: fixed; right: 24px; bottom: 24px; z-index: 10; padding: 14px 22px; border-radius: 999px;
    background: #22c55e; color: white; font-weight: 600; text-decoration: none;
    opacity: 0; pointer-events: none; transform: translateY(20px); transition: opacity 0.3s ease, transform 0.3s ease;
}
.float-whatsapp.visible { opacity: 1; pointer-events: auto; transform: none; }
"#;

/// Шаблон поста для Hacker News. Туда постим руками, API нет.
pub const TEMPLATE: &str = "
====== HACKER NEWS POST ======

Title: Show HN: Built a 3D band website with Gaussian Splatting

URL: https://aram.band

(Post as link, not text. HN prefers links.)

If you want to add context, comment after posting:

---
Hey HN! We're an indie band (A-RAM) and built our website using 3D Gaussian Splatting.

The 3D scene was captured with an iPhone and processed to create an interactive splat viewer. You can rotate around the scene and there's a fallback 2D mode for low-power devices.

Tech stack:
- Next.js 15
- Three.js
- @mkkellogg/gaussian-splats-3d
- Deployed on Vercel

The splat file (fire.ply) is about 50MB but streams progressively. Would love feedback on both the tech implementation and the music!

Source: https://github.com/sborik/aram
---
";

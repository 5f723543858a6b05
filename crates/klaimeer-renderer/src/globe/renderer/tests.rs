use std::f64::consts::TAU;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::globe::resources::{GlobeResource, ResourceLedger, ResourceState};
use crate::globe::types::FrameUniforms;

// =============================================================================
// Test doubles
// =============================================================================

struct FakeSurface {
    size: PhysicalSize,
    scale_factor: f64,
}

impl FakeSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            size: PhysicalSize::new(width, height),
            scale_factor: 1.0,
        }
    }
}

impl DrawableSurface for FakeSurface {
    fn inner_size(&self) -> PhysicalSize {
        self.size
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

struct FakeBackend {
    size: PhysicalSize,
    resizes: Vec<(PhysicalSize, f64)>,
    renders: Vec<FrameUniforms>,
    releases: Arc<AtomicUsize>,
    fail_render: bool,
    skip_present: bool,
    ledger: ResourceLedger,
    uploaded_points: usize,
}

impl FakeBackend {
    fn for_surface(surface: &FakeSurface, assets: &GlobeAssets) -> Self {
        Self {
            size: surface.size,
            resizes: Vec::new(),
            renders: Vec::new(),
            releases: Arc::new(AtomicUsize::new(0)),
            fail_render: false,
            skip_present: false,
            ledger: ResourceLedger::all_live(),
            uploaded_points: assets.points.len(),
        }
    }
}

impl GlobeBackend for FakeBackend {
    fn output_size(&self) -> PhysicalSize {
        self.size
    }

    fn resize(&mut self, size: PhysicalSize, scale_factor: f64) {
        self.size = size;
        self.resizes.push((size, scale_factor));
    }

    fn render(&mut self, uniforms: &FrameUniforms) -> Result<bool, RendererError> {
        if self.fail_render {
            return Err(RendererError::SurfaceError("out of memory".into()));
        }
        if self.skip_present {
            return Ok(false);
        }
        self.renders.push(*uniforms);
        Ok(true)
    }

    fn release(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
        for resource in GlobeResource::ALL {
            self.ledger.dispose(resource);
        }
    }

    fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }
}

fn mount(width: u32, height: u32, bus: &SurfaceEventBus) -> GlobeRenderer<FakeBackend> {
    GlobeRenderer::mount(
        Some(FakeSurface::new(width, height)),
        bus,
        &GlobeConfig::default(),
        |surface, assets| Ok(FakeBackend::for_surface(&surface, assets)),
    )
    .unwrap()
    .unwrap()
}

fn resized(width: u32, height: u32) -> SurfaceEvent {
    SurfaceEvent::Resized {
        size: PhysicalSize::new(width, height),
        scale_factor: 1.0,
    }
}

fn angle_close(actual: f64, expected: f64) -> bool {
    let diff = (actual - expected.rem_euclid(TAU)).abs();
    diff < 1e-9 || (TAU - diff) < 1e-9
}

// =============================================================================
// Mount
// =============================================================================

#[test]
fn mount_without_mount_point_is_noop() {
    let bus = SurfaceEventBus::default();
    let mut built = false;
    let result = GlobeRenderer::<FakeBackend>::mount(
        None::<FakeSurface>,
        &bus,
        &GlobeConfig::default(),
        |surface, assets| {
            built = true;
            Ok(FakeBackend::for_surface(&surface, assets))
        },
    );
    assert!(matches!(result, Ok(None)));
    assert!(!built);
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn mount_reads_surface_dimensions() {
    let bus = SurfaceEventBus::default();
    let globe = mount(1600, 900, &bus);
    assert!(globe.is_active());
    assert_eq!(globe.scene().viewport(), PhysicalSize::new(1600, 900));
    assert!((globe.scene().camera.aspect - 1600.0 / 900.0).abs() < 1e-6);
    assert_eq!(globe.backend().uploaded_points, 1000);
    assert_eq!(bus.subscriber_count(), 1);
}

#[test]
fn mount_reads_density() {
    let bus = SurfaceEventBus::default();
    let surface = FakeSurface {
        size: PhysicalSize::new(800, 600),
        scale_factor: 2.0,
    };
    let globe = GlobeRenderer::mount(Some(surface), &bus, &GlobeConfig::default(), |s, a| {
        Ok(FakeBackend::for_surface(&s, a))
    })
    .unwrap()
    .unwrap();
    assert_eq!(globe.scale_factor(), 2.0);
}

#[test]
fn mount_propagates_backend_error() {
    let bus = SurfaceEventBus::default();
    let result = GlobeRenderer::<FakeBackend>::mount(
        Some(FakeSurface::new(800, 600)),
        &bus,
        &GlobeConfig::default(),
        |_, _| Err(RendererError::AdapterNotFound),
    );
    assert!(matches!(result, Err(RendererError::AdapterNotFound)));
    assert_eq!(bus.subscriber_count(), 0);
}

// =============================================================================
// Frames
// =============================================================================

#[test]
fn frame_renders_and_advances() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);

    assert_eq!(globe.frame(), FrameOutcome::Rendered);
    assert_eq!(globe.backend().renders.len(), 1);
    assert!((globe.backend().renders[0].sphere.time - 0.01).abs() < 1e-6);
    assert_eq!(globe.scene().animation.frames, 1);
}

#[test]
fn rotation_is_monotonic_over_many_frames() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);

    for k in 1..=4000u64 {
        globe.frame();
        if k % 500 == 0 {
            let animation = &globe.scene().animation;
            assert!(angle_close(animation.sphere_angle, 0.002 * k as f64), "k = {k}");
            assert!(angle_close(animation.wireframe_angle, 0.002 * k as f64), "k = {k}");
            assert!(angle_close(animation.points_angle, 0.001 * k as f64), "k = {k}");
        }
    }
    assert_eq!(globe.backend().renders.len(), 4000);
}

#[test]
fn render_error_keeps_loop_running() {
    let bus = SurfaceEventBus::default();
    let mut globe = GlobeRenderer::mount(
        Some(FakeSurface::new(800, 600)),
        &bus,
        &GlobeConfig::default(),
        |s, a| {
            let mut backend = FakeBackend::for_surface(&s, a);
            backend.fail_render = true;
            Ok(backend)
        },
    )
    .unwrap()
    .unwrap();

    assert_eq!(globe.frame(), FrameOutcome::Skipped);
    assert_eq!(globe.frame(), FrameOutcome::Skipped);
    assert_eq!(globe.scene().animation.frames, 2);
    assert!(globe.is_active());
}

#[test]
fn unpresented_frame_is_skipped() {
    let bus = SurfaceEventBus::default();
    let mut globe = GlobeRenderer::mount(
        Some(FakeSurface::new(800, 600)),
        &bus,
        &GlobeConfig::default(),
        |s, a| {
            let mut backend = FakeBackend::for_surface(&s, a);
            backend.skip_present = true;
            Ok(backend)
        },
    )
    .unwrap()
    .unwrap();

    assert_eq!(globe.frame(), FrameOutcome::Skipped);
    assert!(globe.backend().renders.is_empty());
    assert_eq!(globe.scene().animation.frames, 1);

    globe.backend.skip_present = false;
    assert_eq!(globe.frame(), FrameOutcome::Rendered);
    assert_eq!(globe.backend().renders.len(), 1);
}

// =============================================================================
// Resize
// =============================================================================

#[test]
fn resize_with_same_dimensions_changes_nothing() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);
    let aspect = globe.scene().camera.aspect;
    let projection = *globe.scene().camera.projection();

    assert!(!globe.handle_resize(PhysicalSize::new(800, 600), 1.0));
    assert_eq!(globe.scene().camera.aspect, aspect);
    assert_eq!(*globe.scene().camera.projection(), projection);
    assert_eq!(globe.backend().output_size(), PhysicalSize::new(800, 600));
    assert!(globe.backend().resizes.is_empty());
}

#[test]
fn resize_updates_camera_and_output() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);

    assert!(globe.handle_resize(PhysicalSize::new(1000, 500), 1.0));
    assert!((globe.scene().camera.aspect - 2.0).abs() < 1e-6);
    assert_eq!(globe.backend().output_size(), PhysicalSize::new(1000, 500));
    assert_eq!(globe.backend().resizes.len(), 1);

    // Repeating the same notification is a no-op.
    assert!(!globe.handle_resize(PhysicalSize::new(1000, 500), 1.0));
    assert_eq!(globe.backend().resizes.len(), 1);
}

#[test]
fn density_change_resizes_output_only() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);
    let aspect = globe.scene().camera.aspect;

    assert!(globe.handle_resize(PhysicalSize::new(800, 600), 2.0));
    assert_eq!(globe.scene().camera.aspect, aspect);
    assert_eq!(globe.backend().resizes, vec![(PhysicalSize::new(800, 600), 2.0)]);
}

#[test]
fn empty_resize_is_ignored() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);

    assert!(!globe.handle_resize(PhysicalSize::new(0, 0), 1.0));
    assert_eq!(globe.scene().viewport(), PhysicalSize::new(800, 600));
    assert!(globe.backend().resizes.is_empty());
}

#[test]
fn published_resize_is_applied_on_next_frame() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);

    bus.publish(resized(1200, 600));
    assert_eq!(globe.scene().viewport(), PhysicalSize::new(800, 600));

    globe.frame();
    assert_eq!(globe.scene().viewport(), PhysicalSize::new(1200, 600));
    assert_eq!(globe.backend().output_size(), PhysicalSize::new(1200, 600));
}

#[test]
fn process_events_applies_latest_size() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);

    bus.publish(resized(900, 600));
    bus.publish(SurfaceEvent::ScaleFactorChanged { scale_factor: 1.5 });
    bus.publish(SurfaceEvent::Resized {
        size: PhysicalSize::new(900, 300),
        scale_factor: 1.5,
    });
    globe.process_events();

    assert!((globe.scene().camera.aspect - 3.0).abs() < 1e-6);
    assert_eq!(globe.scale_factor(), 1.5);
    assert_eq!(globe.backend().resizes.last(), Some(&(PhysicalSize::new(900, 300), 1.5)));
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn teardown_releases_everything() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);
    globe.frame();
    globe.teardown();

    let ledger = globe.backend().ledger();
    for resource in GlobeResource::GEOMETRY
        .into_iter()
        .chain(GlobeResource::MATERIALS)
    {
        assert_eq!(ledger.state(resource), Some(ResourceState::Disposed), "{resource}");
    }
    assert!(ledger.is_disposed(GlobeResource::Renderer));
    assert!(ledger.all_disposed());
}

#[test]
fn teardown_twice_is_safe() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);
    globe.teardown();
    globe.teardown();

    assert!(!globe.is_active());
    assert_eq!(globe.backend().releases.load(Ordering::SeqCst), 1);
}

#[test]
fn teardown_unsubscribes() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);
    assert_eq!(bus.subscriber_count(), 1);

    globe.teardown();
    assert_eq!(bus.subscriber_count(), 0);
    assert_eq!(bus.publish(resized(100, 100)), 0);
}

#[test]
fn frame_after_teardown_is_stopped() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);
    globe.frame();
    globe.teardown();

    assert_eq!(globe.frame(), FrameOutcome::Stopped);
    assert_eq!(globe.backend().renders.len(), 1);
    assert_eq!(globe.scene().animation.frames, 1);
}

#[test]
fn resize_after_teardown_is_ignored() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);
    globe.teardown();

    assert!(!globe.handle_resize(PhysicalSize::new(400, 400), 1.0));
    assert!(globe.backend().resizes.is_empty());
}

#[test]
fn external_frame_loop_handle_observes_teardown() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);
    let handle = globe.frame_loop().clone();

    assert!(handle.is_active());
    globe.teardown();
    assert!(!handle.is_active());
}

#[test]
fn drop_tears_down() {
    let bus = SurfaceEventBus::default();
    let globe = mount(800, 600, &bus);
    let releases = Arc::clone(&globe.backend().releases);
    let handle = globe.frame_loop().clone();

    drop(globe);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert!(!handle.is_active());
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn drop_after_teardown_releases_once() {
    let bus = SurfaceEventBus::default();
    let mut globe = mount(800, 600, &bus);
    let releases = Arc::clone(&globe.backend().releases);

    globe.teardown();
    drop(globe);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use glam::{Mat4, Vec2};
use shm_core::{
    AnimationClock, ChartRect, Layout, SceneFrame, SceneGeometry, SimulationState, VectorGlyph,
    VectorKind, VectorVisibility, WaveformPoint, WaveformWindow, COLOR_ACCELERATION,
    COLOR_BACKGROUND, COLOR_LIGHT_RAY, COLOR_PARTICLE, COLOR_RADIUS, COLOR_SCREEN, COLOR_SHADOW,
    COLOR_VELOCITY, COLOR_WAVEFORM, DERIVATION_STEPS, VIEW_HEIGHT, VIEW_WIDTH,
};

const MAX_INSTANCES: usize = 2048;
const PARTICLE_SIZE: f32 = 16.0;
const GLYPH_DOT_SPACING: f32 = 9.0;
const ORBIT_OUTLINE_DOTS: usize = 48;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    pos: [f32; 2],
    scale: f32,
    color: [f32; 4],
}

/// All mutable application state; owned by the event loop, mutated only
/// between frames.
struct AppState {
    sim: SimulationState,
    clock: AnimationClock,
    visibility: VectorVisibility,
    layout: Layout,
    geometry: SceneGeometry,
    waveform: WaveformWindow,
    chart: ChartRect,
    started: Instant,
}

impl AppState {
    fn new() -> Self {
        Self {
            sim: SimulationState::default(),
            clock: AnimationClock::new(),
            visibility: VectorVisibility::default(),
            layout: Layout::VerticalScreen,
            geometry: SceneGeometry::default(),
            waveform: WaveformWindow::default(),
            chart: ChartRect::default(),
            started: Instant::now(),
        }
    }

    fn handle_key(&mut self, key: &Key) {
        match key.as_ref() {
            Key::Named(NamedKey::Space) => {
                self.sim.toggle_pause();
                log::info!("paused: {}", self.sim.paused);
            }
            Key::Named(NamedKey::ArrowUp) => {
                self.sim.adjust_omega(0.1);
                log::info!("omega: {:.1} rad/s", self.sim.omega);
            }
            Key::Named(NamedKey::ArrowDown) => {
                self.sim.adjust_omega(-0.1);
                log::info!("omega: {:.1} rad/s", self.sim.omega);
            }
            Key::Named(NamedKey::ArrowRight) => {
                self.sim.adjust_radius(5.0);
                log::info!("radius: {:.0}", self.sim.radius);
            }
            Key::Named(NamedKey::ArrowLeft) => {
                self.sim.adjust_radius(-5.0);
                log::info!("radius: {:.0}", self.sim.radius);
            }
            Key::Character("r" | "R") => {
                self.clock.reset(&mut self.sim);
                log::info!("reset");
            }
            Key::Character("1") => self.visibility.toggle(VectorKind::Radius),
            Key::Character("2") => self.visibility.toggle(VectorKind::Velocity),
            Key::Character("3") => self.visibility.toggle(VectorKind::Acceleration),
            Key::Character("4") => self.visibility.toggle(VectorKind::Projection),
            Key::Character("l" | "L") => {
                self.layout = self.layout.next();
                log::info!("layout: {:?}", self.layout);
            }
            Key::Character("d" | "D") => {
                for step in DERIVATION_STEPS {
                    log::info!("[{}] {}: {}", step.id, step.title, step.formula);
                }
            }
            _ => {}
        }
    }

    /// Derive one frame's worth of draw instances from a single consistent
    /// snapshot of the simulation state.
    fn build_instances(&self) -> Vec<InstanceData> {
        let frame = SceneFrame::build(&self.sim, &self.visibility, self.layout, &self.geometry);
        let points = self.waveform.sample(
            self.sim.time,
            self.sim.omega,
            self.sim.radius,
            self.layout.axis(),
        );

        let mut out = Vec::with_capacity(MAX_INSTANCES);
        push_orbit_outline(&mut out, &frame);
        push_dotted_line(&mut out, frame.screen.0, frame.screen.1, 8.0, 5.0, COLOR_SCREEN);
        if let Some(ray) = &frame.projection_ray {
            push_light_rays(&mut out, &frame);
            push_dotted_line(&mut out, ray.from, ray.to, 10.0, 2.5, COLOR_LIGHT_RAY);
        }
        if let Some(glyph) = &frame.radius_glyph {
            push_glyph(&mut out, glyph, COLOR_RADIUS);
            out.push(dot(frame.center, 8.0, COLOR_RADIUS));
        }
        if let Some(glyph) = &frame.velocity_glyph {
            push_glyph(&mut out, glyph, COLOR_VELOCITY);
        }
        if let Some(glyph) = &frame.acceleration_glyph {
            push_glyph(&mut out, glyph, COLOR_ACCELERATION);
        }
        out.push(dot(frame.particle, PARTICLE_SIZE, COLOR_PARTICLE));
        out.push(dot(frame.shadow, PARTICLE_SIZE, COLOR_SHADOW));
        self.push_waveform(&mut out, &points);
        out.truncate(MAX_INSTANCES);
        out
    }

    fn push_waveform(&self, out: &mut Vec<InstanceData>, points: &[WaveformPoint]) {
        for p in points {
            let pos = self.chart.plot(
                p.t,
                p.value,
                self.sim.time,
                self.waveform.duration,
                self.sim.radius,
            );
            out.push(dot(pos, 3.0, COLOR_WAVEFORM));
        }
    }
}

#[inline]
fn dot(pos: Vec2, scale: f32, color: [f32; 4]) -> InstanceData {
    InstanceData {
        pos: pos.to_array(),
        scale,
        color,
    }
}

fn push_dotted_line(
    out: &mut Vec<InstanceData>,
    from: Vec2,
    to: Vec2,
    spacing: f32,
    scale: f32,
    color: [f32; 4],
) {
    let len = from.distance(to);
    let count = ((len / spacing).ceil() as usize).max(1);
    for i in 0..=count {
        let t = i as f32 / count as f32;
        out.push(dot(from.lerp(to, t), scale, color));
    }
}

fn push_glyph(out: &mut Vec<InstanceData>, glyph: &VectorGlyph, color: [f32; 4]) {
    push_dotted_line(out, glyph.from, glyph.to, GLYPH_DOT_SPACING, 4.0, color);
    // oversized tip dot as the arrowhead
    out.push(dot(glyph.to, 9.0, color));
}

fn push_orbit_outline(out: &mut Vec<InstanceData>, frame: &SceneFrame) {
    for i in 0..ORBIT_OUTLINE_DOTS {
        // skip every third dot for a dashed look
        if i % 3 == 2 {
            continue;
        }
        let angle = i as f32 / ORBIT_OUTLINE_DOTS as f32 * std::f32::consts::TAU;
        let pos = frame.center + Vec2::new(angle.cos(), -angle.sin()) * frame.orbit_radius;
        out.push(dot(pos, 3.0, COLOR_SCREEN));
    }
}

/// Parallel rays from the light source toward the projection screen,
/// spanning the orbit's extent on the projected axis.
fn push_light_rays(out: &mut Vec<InstanceData>, frame: &SceneFrame) {
    let rays = 9;
    for i in 0..rays {
        let f = i as f32 / (rays - 1) as f32 * 2.0 - 1.0;
        let offset = frame.orbit_radius * f;
        let (from, to) = match frame.layout {
            Layout::VerticalScreen | Layout::VerticalChart => (
                Vec2::new(40.0, frame.center.y + offset),
                Vec2::new(frame.screen.0.x, frame.center.y + offset),
            ),
            Layout::HorizontalScreen => (
                Vec2::new(frame.center.x + offset, 40.0),
                Vec2::new(frame.center.x + offset, frame.screen.0.y),
            ),
        };
        push_dotted_line(out, from, to, 18.0, 1.6, COLOR_LIGHT_RAY);
    }
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader_source: &str = shm_core::SCENE_WGSL;
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertices for two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 8,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 12,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            width: size.width,
            height: size.height,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Orthographic projection that fits the fixed viewbox into the window,
    /// letterboxing the longer dimension.
    fn view_proj(&self) -> [[f32; 4]; 4] {
        let win_aspect = self.width as f32 / self.height.max(1) as f32;
        let view_aspect = VIEW_WIDTH / VIEW_HEIGHT;
        let (mut left, mut right, mut top, mut bottom) = (0.0, VIEW_WIDTH, 0.0, VIEW_HEIGHT);
        if win_aspect > view_aspect {
            let extra = VIEW_HEIGHT * win_aspect - VIEW_WIDTH;
            left -= extra * 0.5;
            right += extra * 0.5;
        } else {
            let extra = VIEW_WIDTH / win_aspect - VIEW_HEIGHT;
            top -= extra * 0.5;
            bottom += extra * 0.5;
        }
        Mat4::orthographic_rh(left, right, bottom, top, -1.0, 1.0).to_cols_array_2d()
    }

    fn render(&mut self, instances: &[InstanceData]) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: self.view_proj(),
            }),
        );
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(instances));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let [r, g, b, _] = COLOR_BACKGROUND;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    log::info!("shm-lab: space=pause r=reset arrows=omega/radius 1-4=overlays l=layout d=derivation");

    let mut app = AppState::new();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("SHM Lab: circular motion and its shadow")
        .build(&event_loop)
        .expect("window");

    let mut gpu = pollster::block_on(GpuState::new(&window)).expect("gpu");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => gpu.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    app.handle_key(&event.logical_key);
                }
            }
            Event::AboutToWait => {
                let now = app.started.elapsed().as_secs_f64();
                app.clock.tick(&mut app.sim, now);
                let instances = app.build_instances();
                match gpu.render(&instances) {
                    Ok(_) => gpu.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(e) => log::error!("render error: {e:?}"),
                }
            }
            _ => {}
        })
        .unwrap();
}
